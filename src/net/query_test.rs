use super::*;

// =============================================================
// Request shapes
// =============================================================

#[test]
fn select_renders_columns_filters_order_and_limit() {
    let query = Query::select("projects", "*")
        .eq("owner_id", "u-1")
        .order_desc("created_at")
        .limit(50);
    assert_eq!(query.method(), "GET");
    assert_eq!(
        query.path(),
        "/rest/v1/projects?select=*&owner_id=eq.u-1&order=created_at.desc&limit=50"
    );
    assert_eq!(query.prefer(), None);
    assert_eq!(query.body(), None);
}

#[test]
fn select_without_clauses_has_bare_query_string() {
    let query = Query::select("scans", "id");
    assert_eq!(query.path(), "/rest/v1/scans?select=id");
}

#[test]
fn counted_select_asks_for_exact_count() {
    let query = Query::select("projects", "id").counted().eq("owner_id", "u-1");
    assert_eq!(query.prefer(), Some("count=exact"));
    assert_eq!(query.path(), "/rest/v1/projects?select=id&owner_id=eq.u-1");
}

#[test]
fn in_list_renders_parenthesized_values() {
    let query = Query::select("scans", "id")
        .counted()
        .in_list("status", &["pending", "running"]);
    assert_eq!(
        query.path(),
        "/rest/v1/scans?select=id&status=in.(pending,running)"
    );
}

#[test]
fn order_asc_renders_asc_direction() {
    let query = Query::select("scans", "*").order_asc("started_at");
    assert_eq!(query.path(), "/rest/v1/scans?select=*&order=started_at.asc");
}

#[test]
fn insert_posts_body_without_query_string() {
    let query = Query::insert("projects", serde_json::json!({ "name": "API" }));
    assert_eq!(query.method(), "POST");
    assert_eq!(query.path(), "/rest/v1/projects");
    assert_eq!(query.prefer(), Some("return=minimal"));
    assert_eq!(query.body(), Some(r#"{"name":"API"}"#.to_owned()));
}

#[test]
fn update_patches_rows_matching_filters() {
    let query =
        Query::update("scanners", serde_json::json!({ "status": "active" })).eq("id", "s-9");
    assert_eq!(query.method(), "PATCH");
    assert_eq!(query.path(), "/rest/v1/scanners?id=eq.s-9");
    assert_eq!(query.prefer(), Some("return=minimal"));
    assert_eq!(query.body(), Some(r#"{"status":"active"}"#.to_owned()));
}

// =============================================================
// Response helpers
// =============================================================

#[test]
fn error_message_surfaces_backend_message_verbatim() {
    let msg = error_message(400, r#"{"message":"null value in column \"name\""}"#);
    assert_eq!(msg, "null value in column \"name\"");
}

#[test]
fn error_message_falls_back_to_status_line() {
    assert_eq!(error_message(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(error_message(400, r#"{"message":""}"#), "request failed: 400");
    assert_eq!(error_message(404, ""), "request failed: 404");
}

#[test]
fn content_range_total_parses_range_and_star_forms() {
    assert_eq!(content_range_total("0-24/3573"), Some(3573));
    assert_eq!(content_range_total("*/0"), Some(0));
    assert_eq!(content_range_total("garbage"), None);
}

// =============================================================
// Native (non-hydrate) stubs
// =============================================================

#[test]
fn fetch_is_unavailable_off_browser() {
    let query = Query::select("projects", "*");
    let result = futures::executor::block_on(fetch::<serde_json::Value>(&query));
    assert_eq!(result.unwrap_err(), "not available on server");
}

#[test]
fn execute_is_unavailable_off_browser() {
    let query = Query::insert("projects", serde_json::json!({}));
    let result = futures::executor::block_on(execute(&query));
    assert_eq!(result.unwrap_err(), "not available on server");
}
