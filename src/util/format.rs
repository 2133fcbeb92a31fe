//! Display formatting helpers for timestamps, durations, and URLs.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a scan duration in seconds as `"45s"` or `"2m 5s"`.
///
/// Callers render `-` themselves for scans that have not accumulated time.
pub fn format_duration(seconds: i64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    format!("{minutes}m {remaining}s")
}

/// Date portion of an ISO-8601 timestamp (`2026-08-10T12:00:00Z` -> `2026-08-10`).
pub fn date_only(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Compact `date time` rendering of an ISO-8601 timestamp, second precision.
pub fn date_time(timestamp: &str) -> String {
    let mut parts = timestamp.splitn(2, 'T');
    let date = parts.next().unwrap_or(timestamp);
    let Some(rest) = parts.next() else {
        return date.to_owned();
    };
    let time: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ':')
        .collect();
    if time.is_empty() {
        date.to_owned()
    } else {
        format!("{date} {time}")
    }
}

/// Host portion of a URL for compact display (`https://github.com/a/b` -> `github.com`).
pub fn url_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest.split(['/', '?', '#']).next()?;
    if host.is_empty() { None } else { Some(host) }
}
