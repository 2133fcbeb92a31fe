//! Client-side filter for the vulnerabilities screen.
//!
//! DESIGN
//! ======
//! The filter is a closed set mirroring the screen's select control. It can
//! render itself both as the server-side `eq` clause applied at fetch time
//! and as an in-memory predicate, so the two stay in agreement.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::net::types::{Severity, VulnStatus, Vulnerability};

/// Active filter choice on the vulnerabilities screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VulnFilter {
    /// Show everything.
    #[default]
    All,
    /// Only findings still in `open` status.
    Open,
    /// Only findings of exactly this severity.
    Severity(Severity),
}

impl VulnFilter {
    /// Filter choices in the order the select control offers them.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Open,
        Self::Severity(Severity::Critical),
        Self::Severity(Severity::High),
        Self::Severity(Severity::Medium),
        Self::Severity(Severity::Low),
    ];

    /// Stable option value used by the select control.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Severity(severity) => severity.as_str(),
        }
    }

    /// Parse a select option value back into a filter. Unknown values fall
    /// back to `All`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "critical" => Self::Severity(Severity::Critical),
            "high" => Self::Severity(Severity::High),
            "medium" => Self::Severity(Severity::Medium),
            "low" => Self::Severity(Severity::Low),
            _ => Self::All,
        }
    }

    /// Human label for the select control.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Vulnerabilities",
            Self::Open => "Open Only",
            Self::Severity(severity) => severity.label(),
        }
    }

    /// The `(column, value)` pair to apply as a server-side `eq` clause,
    /// or `None` for the unfiltered view.
    pub fn as_clause(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::All => None,
            Self::Open => Some(("status", VulnStatus::Open.as_str())),
            Self::Severity(severity) => Some(("severity", severity.as_str())),
        }
    }

    /// In-memory predicate equivalent to `as_clause`.
    pub fn matches(self, vuln: &Vulnerability) -> bool {
        match self {
            Self::All => true,
            Self::Open => vuln.status == VulnStatus::Open,
            Self::Severity(severity) => vuln.severity == severity,
        }
    }

    /// Retain only rows matching this filter. Reads are already narrowed
    /// server-side; this keeps the displayed list honest should the backend
    /// return rows outside the clause.
    #[must_use]
    pub fn apply(self, rows: Vec<Vulnerability>) -> Vec<Vulnerability> {
        match self {
            Self::All => rows,
            _ => rows.into_iter().filter(|v| self.matches(v)).collect(),
        }
    }

    /// Empty-state message shown when no findings match.
    pub fn empty_message(self) -> String {
        match self {
            Self::All => "Great job! No security issues detected yet.".to_owned(),
            Self::Open => "No open vulnerabilities found.".to_owned(),
            Self::Severity(severity) => {
                format!("No {} vulnerabilities found.", severity.as_str())
            }
        }
    }
}
