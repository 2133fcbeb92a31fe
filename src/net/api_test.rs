use super::*;
use crate::net::types::Severity;

// =============================================================
// Read query shapes
// =============================================================

#[test]
fn projects_query_scopes_to_owner_newest_first() {
    assert_eq!(
        projects_query("u-1").path(),
        "/rest/v1/projects?select=*&owner_id=eq.u-1&order=created_at.desc"
    );
}

#[test]
fn scanners_query_scopes_to_owner_newest_first() {
    assert_eq!(
        scanners_query("u-1").path(),
        "/rest/v1/scanners?select=*&owner_id=eq.u-1&order=created_at.desc"
    );
}

#[test]
fn scans_query_all_visible_is_unscoped_and_capped() {
    assert_eq!(
        scans_query(&ScanScope::AllVisible, 50).path(),
        "/rest/v1/scans?select=*&order=started_at.desc&limit=50"
    );
}

#[test]
fn scans_query_project_scope_adds_eq_clause() {
    assert_eq!(
        scans_query(&ScanScope::Project("p-7".to_owned()), 20).path(),
        "/rest/v1/scans?select=*&project_id=eq.p-7&order=started_at.desc&limit=20"
    );
}

#[test]
fn vulnerabilities_query_applies_filter_server_side() {
    assert_eq!(
        vulnerabilities_query(VulnFilter::All).path(),
        "/rest/v1/vulnerabilities?select=*&order=created_at.desc"
    );
    assert_eq!(
        vulnerabilities_query(VulnFilter::Open).path(),
        "/rest/v1/vulnerabilities?select=*&status=eq.open&order=created_at.desc"
    );
    assert_eq!(
        vulnerabilities_query(VulnFilter::Severity(Severity::Critical)).path(),
        "/rest/v1/vulnerabilities?select=*&severity=eq.critical&order=created_at.desc"
    );
}

// =============================================================
// Dashboard stat queries
// =============================================================

#[test]
fn stats_queries_cover_the_four_reads() {
    let [projects, completed, vulns, active] = stats_queries("u-1");
    assert_eq!(projects.path(), "/rest/v1/projects?select=id&owner_id=eq.u-1");
    assert_eq!(projects.prefer(), Some("count=exact"));
    assert_eq!(
        completed.path(),
        "/rest/v1/scans?select=id,status&status=eq.completed"
    );
    assert_eq!(
        vulns.path(),
        "/rest/v1/vulnerabilities?select=id,severity,status"
    );
    assert_eq!(
        active.path(),
        "/rest/v1/scans?select=id&status=in.(pending,running)"
    );
    assert_eq!(active.prefer(), Some("count=exact"));
}

#[test]
fn count_of_prefers_the_exact_backend_count() {
    let counted = Rows::<u8> {
        rows: vec![1, 2],
        count: Some(40),
    };
    assert_eq!(count_of(&counted), 40);

    let uncounted = Rows::<u8> {
        rows: vec![1, 2, 3],
        count: None,
    };
    assert_eq!(count_of(&uncounted), 3);
}
