//! Typed backend helpers built on the generic query client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never build queries themselves; they call these helpers, which
//! thread the scope (owner id, scan scope, active filter) through as explicit
//! parameters so backend access stays testable and mockable. Read failures
//! are logged here and surfaced as `Err` so callers can fall back to empty
//! lists without retrying; write failures carry the backend's own message
//! for inline display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::query::{self, Query, Rows};
use super::types::{
    NewProject, NewScanner, Profile, Project, ProjectChanges, Scan, Scanner, ScannerChanges,
    VulnStatRow, Vulnerability,
};
use crate::state::stats::DashboardStats;
use crate::util::filters::VulnFilter;

/// Session endpoint resolving the signed-in identity.
pub const AUTH_USER_PATH: &str = "/auth/v1/user";
/// Session endpoint ending the current session.
pub const AUTH_LOGOUT_PATH: &str = "/auth/v1/logout";

/// Visibility scope for scan-history reads.
///
/// The history screen deliberately reads everything the backend's row
/// policies expose rather than filtering to the signed-in owner; callers
/// that want a narrower view pass `Project`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanScope {
    /// Every scan visible to the current session.
    AllVisible,
    /// Scans of one project only.
    Project(String),
}

/// Fetch the signed-in identity. `None` when signed out or off the browser.
pub async fn fetch_current_profile() -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(AUTH_USER_PATH)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the current session. Failures are ignored; the shell drops the local
/// identity either way.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(AUTH_LOGOUT_PATH).send().await;
    }
}

pub(crate) fn projects_query(owner_id: &str) -> Query {
    Query::select("projects", "*")
        .eq("owner_id", owner_id)
        .order_desc("created_at")
}

pub(crate) fn scanners_query(owner_id: &str) -> Query {
    Query::select("scanners", "*")
        .eq("owner_id", owner_id)
        .order_desc("created_at")
}

pub(crate) fn scans_query(scope: &ScanScope, limit: u32) -> Query {
    let query = Query::select("scans", "*");
    let query = match scope {
        ScanScope::AllVisible => query,
        ScanScope::Project(project_id) => query.eq("project_id", project_id),
    };
    query.order_desc("started_at").limit(limit)
}

pub(crate) fn vulnerabilities_query(filter: VulnFilter) -> Query {
    let query = Query::select("vulnerabilities", "*").order_desc("created_at");
    match filter.as_clause() {
        Some((column, value)) => query.eq(column, value),
        None => query,
    }
}

/// The four independent reads behind the dashboard summary, in tally order:
/// owned projects, completed scans, vulnerability stat rows, active scans.
pub(crate) fn stats_queries(owner_id: &str) -> [Query; 4] {
    [
        Query::select("projects", "id").counted().eq("owner_id", owner_id),
        Query::select("scans", "id,status").counted().eq("status", "completed"),
        Query::select("vulnerabilities", "id,severity,status").counted(),
        Query::select("scans", "id")
            .counted()
            .in_list("status", &["pending", "running"]),
    ]
}

/// Exact total when the backend reported one, else the rows we got.
pub(crate) fn count_of<T>(rows: &Rows<T>) -> u64 {
    rows.count.unwrap_or(rows.rows.len() as u64)
}

async fn read_rows<T: serde::de::DeserializeOwned>(query: &Query) -> Result<Vec<T>, String> {
    match query::fetch::<T>(query).await {
        Ok(rows) => Ok(rows.rows),
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("read failed for {}: {err}", query.path());
            Err(err)
        }
    }
}

/// Projects owned by `owner_id`, newest first.
///
/// # Errors
///
/// Returns the backend-reported message; the failure is already logged.
pub async fn fetch_projects(owner_id: &str) -> Result<Vec<Project>, String> {
    read_rows(&projects_query(owner_id)).await
}

/// Scanners owned by `owner_id`, newest first.
///
/// # Errors
///
/// Returns the backend-reported message; the failure is already logged.
pub async fn fetch_scanners(owner_id: &str) -> Result<Vec<Scanner>, String> {
    read_rows(&scanners_query(owner_id)).await
}

/// Scan history within `scope`, newest started first, capped at `limit`.
///
/// # Errors
///
/// Returns the backend-reported message; the failure is already logged.
pub async fn fetch_scans(scope: &ScanScope, limit: u32) -> Result<Vec<Scan>, String> {
    read_rows(&scans_query(scope, limit)).await
}

/// Findings matching `filter`, newest first. The filter is applied
/// server-side as an `eq` clause and re-applied to the returned rows.
///
/// # Errors
///
/// Returns the backend-reported message; the failure is already logged.
pub async fn fetch_vulnerabilities(filter: VulnFilter) -> Result<Vec<Vulnerability>, String> {
    let rows = read_rows(&vulnerabilities_query(filter)).await?;
    Ok(filter.apply(rows))
}

/// Insert a new project owned by the id carried in `project`.
///
/// # Errors
///
/// Returns the backend-reported message for inline display.
pub async fn create_project(project: &NewProject) -> Result<(), String> {
    let row = serde_json::to_value(project).map_err(|e| e.to_string())?;
    query::execute(&Query::insert("projects", row)).await
}

/// Update the project with `id` in place.
///
/// # Errors
///
/// Returns the backend-reported message for inline display.
pub async fn update_project(id: &str, changes: &ProjectChanges) -> Result<(), String> {
    let changes = serde_json::to_value(changes).map_err(|e| e.to_string())?;
    query::execute(&Query::update("projects", changes).eq("id", id)).await
}

/// Insert a new scanner owned by the id carried in `scanner`.
///
/// # Errors
///
/// Returns the backend-reported message for inline display.
pub async fn create_scanner(scanner: &NewScanner) -> Result<(), String> {
    let row = serde_json::to_value(scanner).map_err(|e| e.to_string())?;
    query::execute(&Query::insert("scanners", row)).await
}

/// Update the scanner with `id` in place.
///
/// # Errors
///
/// Returns the backend-reported message for inline display.
pub async fn update_scanner(id: &str, changes: &ScannerChanges) -> Result<(), String> {
    let changes = serde_json::to_value(changes).map_err(|e| e.to_string())?;
    query::execute(&Query::update("scanners", changes).eq("id", id)).await
}

/// Load the dashboard summary: four reads issued concurrently with
/// aggregate-wait semantics, so one failure aborts the whole load.
///
/// # Errors
///
/// Returns the first failing read's message; the failure is logged once.
pub async fn load_stats(owner_id: &str) -> Result<DashboardStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let [projects_q, completed_q, vulns_q, active_q] = stats_queries(owner_id);
        let result = futures::try_join!(
            query::fetch::<serde_json::Value>(&projects_q),
            query::fetch::<serde_json::Value>(&completed_q),
            query::fetch::<VulnStatRow>(&vulns_q),
            query::fetch::<serde_json::Value>(&active_q),
        );
        match result {
            Ok((projects, completed, vulns, active)) => Ok(DashboardStats::tally(
                count_of(&projects),
                count_of(&completed),
                &vulns.rows,
                count_of(&vulns),
                count_of(&active),
            )),
            Err(err) => {
                log::error!("stats load failed: {err}");
                Err(err)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = owner_id;
        Err("not available on server".to_owned())
    }
}
