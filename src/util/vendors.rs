//! Closed catalog of scanner vendors per scanner kind.
//!
//! The (kind, vendor) pairing is a fixed lookup table, not configuration:
//! the scanner form only ever offers vendors belonging to the chosen kind.

#[cfg(test)]
#[path = "vendors_test.rs"]
mod vendors_test;

use crate::net::types::ScannerKind;

/// Vendors offered for `kind`, in display order.
pub fn vendors_for(kind: ScannerKind) -> &'static [&'static str] {
    match kind {
        ScannerKind::Sast => &["Checkmarx", "Fortify", "SonarQube", "Semgrep", "CodeQL"],
        ScannerKind::Dast => &["Acunetix", "Burp Enterprise", "OWASP ZAP", "Netsparker"],
        ScannerKind::Sca => &["Dependency Track", "Snyk", "Nexus IQ", "WhiteSource"],
        ScannerKind::Network => &["Nessus", "OpenVAS", "Qualys", "Rapid7"],
        ScannerKind::Container => &["Trivy", "Clair", "Anchore", "Aqua Security"],
    }
}

/// Whether `vendor` belongs to the allowed set for `kind`.
pub fn vendor_allowed(kind: ScannerKind, vendor: &str) -> bool {
    vendors_for(kind).contains(&vendor)
}
