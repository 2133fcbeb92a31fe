use super::*;

#[test]
fn format_duration_under_a_minute_is_seconds_only() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(45), "45s");
    assert_eq!(format_duration(59), "59s");
}

#[test]
fn format_duration_over_a_minute_splits_minutes_and_seconds() {
    assert_eq!(format_duration(60), "1m 0s");
    assert_eq!(format_duration(125), "2m 5s");
    assert_eq!(format_duration(3600), "60m 0s");
}

#[test]
fn date_only_takes_the_date_part() {
    assert_eq!(date_only("2026-08-10T12:00:00Z"), "2026-08-10");
    assert_eq!(date_only("2026-08-10"), "2026-08-10");
}

#[test]
fn date_time_renders_date_and_clock() {
    assert_eq!(date_time("2026-08-10T12:30:05Z"), "2026-08-10 12:30:05");
    assert_eq!(date_time("2026-08-10T12:30:05.123+00:00"), "2026-08-10 12:30:05");
    assert_eq!(date_time("2026-08-10"), "2026-08-10");
}

#[test]
fn url_host_extracts_the_hostname() {
    assert_eq!(url_host("https://github.com/acme/repo"), Some("github.com"));
    assert_eq!(url_host("http://scanner.internal:8443/api"), Some("scanner.internal:8443"));
    assert_eq!(url_host("github.com/acme/repo"), Some("github.com"));
    assert_eq!(url_host(""), None);
    assert_eq!(url_host("https://"), None);
}
