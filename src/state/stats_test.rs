use super::*;

fn row(id: &str, severity: Severity, status: VulnStatus) -> VulnStatRow {
    VulnStatRow {
        id: id.to_owned(),
        severity,
        status,
    }
}

#[test]
fn tally_counts_critical_rows_only() {
    let rows = vec![
        row("a", Severity::Critical, VulnStatus::Open),
        row("b", Severity::High, VulnStatus::Open),
        row("c", Severity::Critical, VulnStatus::Resolved),
        row("d", Severity::Low, VulnStatus::Open),
        row("e", Severity::Medium, VulnStatus::InProgress),
    ];
    let stats = DashboardStats::tally(3, 10, &rows, 5, 1);
    assert_eq!(stats.critical_vulnerabilities, 2);
    assert_eq!(stats.total_vulnerabilities, 5);
}

#[test]
fn tally_counts_resolved_rows_regardless_of_severity() {
    let rows = vec![
        row("a", Severity::Critical, VulnStatus::Resolved),
        row("b", Severity::Low, VulnStatus::Resolved),
        row("c", Severity::High, VulnStatus::FalsePositive),
    ];
    let stats = DashboardStats::tally(0, 0, &rows, 3, 0);
    assert_eq!(stats.resolved_vulnerabilities, 2);
}

#[test]
fn tally_passes_backend_counts_through() {
    let stats = DashboardStats::tally(7, 12, &[], 0, 4);
    assert_eq!(stats.total_projects, 7);
    assert_eq!(stats.total_scans, 12);
    assert_eq!(stats.active_scans, 4);
    assert_eq!(stats.critical_vulnerabilities, 0);
    assert_eq!(stats.resolved_vulnerabilities, 0);
}

#[test]
fn trend_hints_follow_critical_count() {
    let none = DashboardStats::default();
    assert!(!none.vulnerabilities_trending_up());
    assert!(!none.critical_trending_up());

    let some = DashboardStats {
        critical_vulnerabilities: 3,
        ..DashboardStats::default()
    };
    assert!(some.vulnerabilities_trending_up());
    assert!(!some.critical_trending_up());

    let many = DashboardStats {
        critical_vulnerabilities: 6,
        ..DashboardStats::default()
    };
    assert!(many.critical_trending_up());
}
