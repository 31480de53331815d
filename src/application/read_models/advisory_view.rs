//! View representation of a single advisory

use crate::audit::domain::{Advisory, AdvisoryId, Severity};

/// Flattened advisory, ready for templating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryView {
    pub id: AdvisoryId,
    pub severity: Severity,
    pub title: String,
    pub module_name: String,
    pub overview: String,
    pub recommendation: String,
    pub url: String,
    /// Version range of the first finding
    pub version: Option<String>,
    /// First dependency path of the first finding
    pub path: Option<String>,
    /// Dependency paths beyond the one shown in `path`
    pub additional_paths: usize,
}

impl From<&Advisory> for AdvisoryView {
    fn from(advisory: &Advisory) -> Self {
        let total_paths: usize = advisory.findings().iter().map(|f| f.paths.len()).sum();
        Self {
            id: advisory.id(),
            severity: advisory.severity(),
            title: advisory.title().to_string(),
            module_name: advisory.module_name().to_string(),
            overview: advisory.overview().to_string(),
            recommendation: advisory.recommendation().to_string(),
            url: advisory.url().to_string(),
            version: advisory.first_version().map(str::to_string),
            path: advisory.first_path().map(str::to_string),
            additional_paths: total_paths.saturating_sub(1),
        }
    }
}
