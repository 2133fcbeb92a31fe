//! Scan-history screen: the latest scan executions as a table.

use leptos::prelude::*;

use crate::net::api::ScanScope;
use crate::net::types::Scan;
use crate::util::format::{date_time, format_duration};

/// The history table shows at most this many of the newest scans.
pub const SCAN_HISTORY_LIMIT: u32 = 50;

/// Scan-history list screen.
///
/// Deliberately reads every scan the backend exposes to this session
/// (`ScanScope::AllVisible`) rather than scoping to the signed-in owner.
#[component]
pub fn ScansPage() -> impl IntoView {
    let scans = LocalResource::new(|| async {
        crate::net::api::fetch_scans(&ScanScope::AllVisible, SCAN_HISTORY_LIMIT)
            .await
            .unwrap_or_default()
    });

    view! {
        <div class="page scans-page">
            <header class="page__header">
                <div>
                    <h2>"Scan History"</h2>
                    <p class="page__subtitle">"View all security scan executions"</p>
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading scans..."</p> }>
                {move || {
                    scans
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <h3>"No scans yet"</h3>
                                        <p>"Start scanning your projects to see results here"</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="scan-table">
                                        <thead>
                                            <tr>
                                                <th>"Status"</th>
                                                <th>"Scan Type"</th>
                                                <th>"Started"</th>
                                                <th>"Duration"</th>
                                                <th>"Findings"</th>
                                                <th>"Severity"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(scan_row)
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One table row for a scan execution.
fn scan_row(scan: Scan) -> impl IntoView {
    let status_class = format!("badge badge--{}", scan.status.as_str());
    let duration = if scan.duration > 0 {
        format_duration(scan.duration)
    } else {
        "-".to_owned()
    };
    let severities = [
        (scan.critical_count, "critical"),
        (scan.high_count, "high"),
        (scan.medium_count, "medium"),
        (scan.low_count, "low"),
    ];

    view! {
        <tr>
            <td>
                <span class=status_class>{scan.status.as_str()}</span>
            </td>
            <td>{scan.scan_type.clone()}</td>
            <td>{date_time(&scan.started_at)}</td>
            <td>{duration}</td>
            <td class="scan-table__findings">{scan.findings_count}</td>
            <td>
                <div class="scan-table__severities">
                    {severities
                        .into_iter()
                        .filter(|(count, _)| *count > 0)
                        .map(|(count, name)| {
                            view! {
                                <span class=format!(
                                    "scan-table__severity scan-table__severity--{name}"
                                )>{count}</span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </td>
        </tr>
    }
}
