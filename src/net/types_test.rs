use super::*;

// =============================================================
// Enum wire strings
// =============================================================

#[test]
fn project_status_serializes_lowercase() {
    for status in ProjectStatus::ALL {
        let json = serde_json::to_value(status).expect("serialize");
        assert_eq!(json, serde_json::json!(status.as_str()));
    }
}

#[test]
fn scanner_kind_serializes_uppercase_acronyms() {
    assert_eq!(
        serde_json::to_value(ScannerKind::Sast).expect("serialize"),
        serde_json::json!("SAST")
    );
    assert_eq!(
        serde_json::to_value(ScannerKind::Dast).expect("serialize"),
        serde_json::json!("DAST")
    );
    assert_eq!(
        serde_json::to_value(ScannerKind::Container).expect("serialize"),
        serde_json::json!("Container")
    );
}

#[test]
fn vuln_status_serializes_snake_case() {
    assert_eq!(VulnStatus::InProgress.as_str(), "in_progress");
    assert_eq!(VulnStatus::FalsePositive.as_str(), "false_positive");
    assert_eq!(
        serde_json::to_value(VulnStatus::FalsePositive).expect("serialize"),
        serde_json::json!("false_positive")
    );
}

#[test]
fn from_value_round_trips_and_defaults_on_unknown() {
    assert_eq!(ProjectStatus::from_value("archived"), ProjectStatus::Archived);
    assert_eq!(ProjectStatus::from_value("bogus"), ProjectStatus::Active);
    assert_eq!(RiskLevel::from_value("critical"), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_value(""), RiskLevel::Low);
    assert_eq!(ScannerKind::from_value("Network"), ScannerKind::Network);
    assert_eq!(ScannerKind::from_value("sast"), ScannerKind::Sast);
    assert_eq!(ScannerStatus::from_value("error"), ScannerStatus::Error);
    assert_eq!(ScannerStatus::from_value("?"), ScannerStatus::Inactive);
}

#[test]
fn severity_ordering_follows_impact() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert!(Severity::High < Severity::Critical);
}

// =============================================================
// Row deserialization
// =============================================================

#[test]
fn project_row_deserializes_from_backend_json() {
    let row: Project = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "name": "Billing API",
        "description": "",
        "repository_url": "https://github.com/acme/billing",
        "owner_id": "u-1",
        "status": "maintenance",
        "risk_level": "high",
        "last_scan_at": null,
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-01T10:00:00Z"
    }))
    .expect("deserialize project");
    assert_eq!(row.status, ProjectStatus::Maintenance);
    assert_eq!(row.risk_level, RiskLevel::High);
    assert_eq!(row.last_scan_at, None);
}

#[test]
fn scanner_row_maps_wire_type_field_to_kind() {
    let row: Scanner = serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "name": "Prod SAST",
        "type": "SAST",
        "vendor": "Semgrep",
        "api_url": "",
        "api_key": "",
        "status": "active",
        "owner_id": "u-1",
        "last_connected_at": "2026-08-20T08:30:00Z",
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-01T10:00:00Z"
    }))
    .expect("deserialize scanner");
    assert_eq!(row.kind, ScannerKind::Sast);
    assert_eq!(row.status, ScannerStatus::Active);
}

#[test]
fn new_scanner_payload_serializes_kind_as_type() {
    let payload = NewScanner {
        name: "ZAP".to_owned(),
        kind: ScannerKind::Dast,
        vendor: "OWASP ZAP".to_owned(),
        api_url: String::new(),
        api_key: String::new(),
        status: ScannerStatus::Inactive,
        owner_id: "u-1".to_owned(),
    };
    let json = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(json["type"], serde_json::json!("DAST"));
    assert_eq!(json["owner_id"], serde_json::json!("u-1"));
    assert!(json.get("kind").is_none());
}

#[test]
fn vulnerability_row_deserializes_optional_fields() {
    let row: Vulnerability = serde_json::from_value(serde_json::json!({
        "id": "v-1",
        "scan_id": "sc-1",
        "project_id": "p-1",
        "title": "SQL injection in search",
        "description": "User input reaches the query builder unescaped.",
        "severity": "critical",
        "cve_id": "",
        "cwe_id": "CWE-89",
        "file_path": "src/search.rs",
        "line_number": 42,
        "status": "in_progress",
        "resolution_notes": "",
        "resolved_at": null,
        "resolved_by": null,
        "created_at": "2026-08-10T12:00:00Z",
        "updated_at": "2026-08-11T09:00:00Z"
    }))
    .expect("deserialize vulnerability");
    assert_eq!(row.severity, Severity::Critical);
    assert_eq!(row.status, VulnStatus::InProgress);
    assert_eq!(row.line_number, Some(42));
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_display_name_prefers_full_name() {
    let profile = Profile {
        id: "u-1".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: Some("Ana Souza".to_owned()),
        avatar_url: None,
        role: "member".to_owned(),
        created_at: "2026-08-01T10:00:00Z".to_owned(),
        updated_at: "2026-08-01T10:00:00Z".to_owned(),
    };
    assert_eq!(profile.display_name(), "Ana Souza");
}

#[test]
fn profile_display_name_falls_back_to_email() {
    let profile = Profile {
        id: "u-1".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: Some(String::new()),
        avatar_url: None,
        role: "member".to_owned(),
        created_at: "2026-08-01T10:00:00Z".to_owned(),
        updated_at: "2026-08-01T10:00:00Z".to_owned(),
    };
    assert_eq!(profile.display_name(), "ana@example.com");
}
