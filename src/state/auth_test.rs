use super::*;

fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: None,
        avatar_url: None,
        role: "member".to_owned(),
        created_at: "2026-08-01T10:00:00Z".to_owned(),
        updated_at: "2026-08-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn auth_state_starts_unresolved() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.profile.is_none());
    assert_eq!(state.owner_id(), None);
}

#[test]
fn owner_id_comes_from_the_signed_in_profile() {
    let state = AuthState {
        profile: Some(profile("u-42")),
        loading: false,
    };
    assert_eq!(state.owner_id(), Some("u-42"));
}
