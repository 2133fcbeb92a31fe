//! Active-view state for the navigation shell.
//!
//! DESIGN
//! ======
//! Navigation is in-memory only: one of N mutually exclusive views is shown
//! and nothing is persisted to the URL.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The screen currently rendered by the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Projects,
    Scanners,
    /// Scan history across all visible projects and scanners.
    Scans,
    Vulnerabilities,
}

impl View {
    /// Sidebar menu order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Projects,
        Self::Scanners,
        Self::Scans,
        Self::Vulnerabilities,
    ];

    /// Sidebar menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Scanners => "Scanners",
            Self::Scans => "Scan History",
            Self::Vulnerabilities => "Vulnerabilities",
        }
    }
}
