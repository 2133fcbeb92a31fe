//! Dashboard summary tallies.
//!
//! DESIGN
//! ======
//! Counts come from independent backend reads; the critical and resolved
//! breakdowns are derived here by filtering the fetched vulnerability rows
//! client-side rather than asking the backend to aggregate.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{Severity, VulnStatRow, VulnStatus};

/// Aggregated counts shown on the dashboard overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: u64,
    pub total_scans: u64,
    pub total_vulnerabilities: u64,
    pub critical_vulnerabilities: u64,
    pub active_scans: u64,
    pub resolved_vulnerabilities: u64,
}

impl DashboardStats {
    /// Combine the four query results into display counts.
    ///
    /// `vuln_rows` is the full stat projection the backend returned;
    /// `total_vulnerabilities` is the backend's exact count for the same
    /// query so the headline number survives any row cap.
    pub fn tally(
        total_projects: u64,
        total_scans: u64,
        vuln_rows: &[VulnStatRow],
        total_vulnerabilities: u64,
        active_scans: u64,
    ) -> Self {
        let critical = vuln_rows
            .iter()
            .filter(|v| v.severity == Severity::Critical)
            .count() as u64;
        let resolved = vuln_rows
            .iter()
            .filter(|v| v.status == VulnStatus::Resolved)
            .count() as u64;
        Self {
            total_projects,
            total_scans,
            total_vulnerabilities,
            critical_vulnerabilities: critical,
            active_scans,
            resolved_vulnerabilities: resolved,
        }
    }

    /// Whether the total-vulnerabilities card should hint a worsening trend.
    pub fn vulnerabilities_trending_up(&self) -> bool {
        self.critical_vulnerabilities > 0
    }

    /// Whether the critical-issues card should hint a worsening trend.
    /// Five or fewer criticals renders the improving hint instead.
    pub fn critical_trending_up(&self) -> bool {
        self.critical_vulnerabilities > 5
    }
}
