//! Wire DTOs for the backend's relational tables.
//!
//! DESIGN
//! ======
//! Each struct mirrors one backend table column-for-column so serde
//! round-trips stay lossless and the query client can remain schema-driven.
//! Ids and timestamps travel as strings exactly as the backend emits them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in identity as stored in the `profiles` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identity identifier (UUID string).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name, if the user set one.
    pub full_name: Option<String>,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Coarse role string (e.g. `"member"`, `"admin"`).
    pub role: String,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Last-modified timestamp (ISO-8601).
    pub updated_at: String,
}

impl Profile {
    /// Name to show in identity-aware chrome; falls back to the email.
    pub fn display_name(&self) -> &str {
        match &self.full_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Lifecycle status of a project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Archived,
    Maintenance,
}

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Archived, Self::Maintenance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Archived => "Archived",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Parse a form select value; unknown values keep the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// Assessed risk classification of a project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Parse a form select value; unknown values keep the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == value)
            .unwrap_or_default()
    }
}

/// A security project as stored in the `projects` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (UUID string).
    pub id: String,
    /// Project name (required by the backend).
    pub name: String,
    /// Free-form description; empty string when not provided.
    pub description: String,
    /// Source repository URL; empty string when not provided.
    pub repository_url: String,
    /// Identity that owns this project (UUID string).
    pub owner_id: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Assessed risk classification.
    pub risk_level: RiskLevel,
    /// Timestamp of the most recent scan, if any (ISO-8601).
    pub last_scan_at: Option<String>,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Last-modified timestamp (ISO-8601).
    pub updated_at: String,
}

/// Insert payload for `projects`; the owner is always carried explicitly.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub repository_url: String,
    pub status: ProjectStatus,
    pub risk_level: RiskLevel,
    pub owner_id: String,
}

/// Update payload for `projects`; `updated_at` is injected by the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectChanges {
    pub name: String,
    pub description: String,
    pub repository_url: String,
    pub status: ProjectStatus,
    pub risk_level: RiskLevel,
    pub updated_at: String,
}

/// Classification of a scanner integration. Wire field name is `type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScannerKind {
    /// Static application security testing.
    #[default]
    #[serde(rename = "SAST")]
    Sast,
    /// Dynamic application security testing.
    #[serde(rename = "DAST")]
    Dast,
    /// Software composition analysis.
    #[serde(rename = "SCA")]
    Sca,
    /// Network vulnerability scanning.
    Network,
    /// Container image scanning.
    Container,
}

impl ScannerKind {
    pub const ALL: [Self; 5] = [
        Self::Sast,
        Self::Dast,
        Self::Sca,
        Self::Network,
        Self::Container,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sast => "SAST",
            Self::Dast => "DAST",
            Self::Sca => "SCA",
            Self::Network => "Network",
            Self::Container => "Container",
        }
    }

    /// Parse a form select value; unknown values keep the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .unwrap_or_default()
    }
}

/// Connection status of a scanner integration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScannerStatus {
    Active,
    #[default]
    Inactive,
    Error,
}

impl ScannerStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Error => "error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Error => "Error",
        }
    }

    /// Parse a form select value; unknown values keep the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// A scanner integration as stored in the `scanners` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scanner {
    /// Unique scanner identifier (UUID string).
    pub id: String,
    /// Display name (required by the backend).
    pub name: String,
    /// Scanner classification; serialized as `type`.
    #[serde(rename = "type")]
    pub kind: ScannerKind,
    /// Product implementing the classification; constrained per kind.
    pub vendor: String,
    /// Endpoint the integration talks to; empty string when not set.
    pub api_url: String,
    /// Secret credential for the endpoint; empty string when not set.
    pub api_key: String,
    /// Connection status.
    pub status: ScannerStatus,
    /// Identity that owns this scanner (UUID string).
    pub owner_id: String,
    /// Timestamp of the last successful connection, if any (ISO-8601).
    pub last_connected_at: Option<String>,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Last-modified timestamp (ISO-8601).
    pub updated_at: String,
}

/// Insert payload for `scanners`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewScanner {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ScannerKind,
    pub vendor: String,
    pub api_url: String,
    pub api_key: String,
    pub status: ScannerStatus,
    pub owner_id: String,
}

/// Update payload for `scanners`; `updated_at` is injected by the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScannerChanges {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ScannerKind,
    pub vendor: String,
    pub api_url: String,
    pub api_key: String,
    pub status: ScannerStatus,
    pub updated_at: String,
}

/// Execution status of a scan run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

impl ScanStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// One scanner execution against a project, as stored in the `scans` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    /// Unique scan identifier (UUID string).
    pub id: String,
    /// Project that was scanned (UUID string).
    pub project_id: String,
    /// Scanner that ran (UUID string).
    pub scanner_id: String,
    /// Free-form scan type label (e.g. `"full"`, `"incremental"`).
    pub scan_type: String,
    /// Execution status.
    pub status: ScanStatus,
    /// Start timestamp (ISO-8601).
    pub started_at: String,
    /// Completion timestamp, if the scan finished (ISO-8601).
    pub completed_at: Option<String>,
    /// Wall-clock duration in seconds; zero while pending/running.
    pub duration: i64,
    /// Total number of findings.
    pub findings_count: i64,
    pub critical_count: i64,
    pub high_count: i64,
    pub medium_count: i64,
    pub low_count: i64,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
}

/// Ordinal impact classification of a vulnerability.
///
/// Variant order encodes the severity ordering, so `Ord` comparisons follow
/// low < medium < high < critical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Triage status of a vulnerability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VulnStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    FalsePositive,
}

impl VulnStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::FalsePositive => "false_positive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::FalsePositive => "False positive",
        }
    }
}

/// A discovered finding, as stored in the `vulnerabilities` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Unique finding identifier (UUID string).
    pub id: String,
    /// Scan that produced this finding (UUID string).
    pub scan_id: String,
    /// Project the finding belongs to (UUID string).
    pub project_id: String,
    /// Short human-readable title (required by the backend).
    pub title: String,
    /// Longer description; empty string when not provided.
    pub description: String,
    /// Impact classification (required by the backend).
    pub severity: Severity,
    /// Assigned CVE identifier; empty string when none.
    pub cve_id: String,
    /// Assigned CWE identifier; empty string when none.
    pub cwe_id: String,
    /// Affected file; empty string for non-code findings.
    pub file_path: String,
    /// Affected line within `file_path`, if known.
    pub line_number: Option<i64>,
    /// Triage status.
    pub status: VulnStatus,
    /// Free-form resolution notes; empty string when unresolved.
    pub resolution_notes: String,
    /// Resolution timestamp, if resolved (ISO-8601).
    pub resolved_at: Option<String>,
    /// Identity that resolved the finding, if resolved (UUID string).
    pub resolved_by: Option<String>,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Last-modified timestamp (ISO-8601).
    pub updated_at: String,
}

/// Narrow projection of `vulnerabilities` used by the dashboard tallies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VulnStatRow {
    /// Unique finding identifier (UUID string).
    pub id: String,
    /// Impact classification.
    pub severity: Severity,
    /// Triage status.
    pub status: VulnStatus,
}
