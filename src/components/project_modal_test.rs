use super::*;

fn project() -> Project {
    Project {
        id: "p-1".to_owned(),
        name: "Billing API".to_owned(),
        description: "Payments service".to_owned(),
        repository_url: "https://github.com/acme/billing".to_owned(),
        owner_id: "u-1".to_owned(),
        status: ProjectStatus::Maintenance,
        risk_level: RiskLevel::High,
        last_scan_at: None,
        created_at: "2026-08-01T10:00:00Z".to_owned(),
        updated_at: "2026-08-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn seeded_draft_copies_every_editable_field() {
    let draft = ProjectDraft::seeded(Some(&project()));
    assert_eq!(draft.name, "Billing API");
    assert_eq!(draft.description, "Payments service");
    assert_eq!(draft.repository_url, "https://github.com/acme/billing");
    assert_eq!(draft.status, ProjectStatus::Maintenance);
    assert_eq!(draft.risk_level, RiskLevel::High);
}

#[test]
fn blank_draft_uses_create_defaults() {
    let draft = ProjectDraft::seeded(None);
    assert_eq!(draft.name, "");
    assert_eq!(draft.status, ProjectStatus::Active);
    assert_eq!(draft.risk_level, RiskLevel::Low);
}

#[test]
fn insert_payload_carries_the_owner() {
    let draft = ProjectDraft {
        name: "New".to_owned(),
        ..ProjectDraft::default()
    };
    let payload = draft.insert_payload("u-9");
    assert_eq!(payload.owner_id, "u-9");
    assert_eq!(payload.name, "New");
    assert_eq!(payload.status, ProjectStatus::Active);
}

#[test]
fn update_payload_carries_the_injected_timestamp_and_no_owner() {
    let draft = ProjectDraft::seeded(Some(&project()));
    let changes = draft.update_payload("2026-08-26T12:00:00Z");
    assert_eq!(changes.updated_at, "2026-08-26T12:00:00Z");
    let json = serde_json::to_value(&changes).expect("serialize");
    assert!(json.get("owner_id").is_none());
    assert_eq!(json["risk_level"], serde_json::json!("high"));
}
