use super::*;

#[test]
fn default_view_is_dashboard() {
    assert_eq!(View::default(), View::Dashboard);
}

#[test]
fn menu_lists_every_view_once() {
    assert_eq!(View::ALL.len(), 5);
    for (i, a) in View::ALL.iter().enumerate() {
        for b in &View::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn labels_match_menu_copy() {
    assert_eq!(View::Dashboard.label(), "Dashboard");
    assert_eq!(View::Scans.label(), "Scan History");
}
