//! Audit read model for the report formatters
//!
//! Aggregates everything a formatter needs so that formatting never has to
//! look at the raw report or the ignore list again.

use super::advisory_view::AdvisoryView;
use crate::audit::domain::{ActionKind, AdvisoryId};

/// Main read model for one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReadModel {
    pub metadata: AuditMetadataView,
    pub summary: AuditSummaryView,
    /// Pass-through advisories, in report order
    pub advisories: Vec<AdvisoryView>,
}

/// View representation of run metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditMetadataView {
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// Counts and remediation steps shown in the summary block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSummaryView {
    pub advisory_count: usize,
    pub ignored_count: usize,
    pub remediations: Vec<RemediationView>,
}

/// One recommended remediation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationView {
    pub kind: ActionKind,
    pub module: String,
    pub target: Option<String>,
    pub depth: Option<u32>,
    pub is_major: bool,
    /// Pass-through advisories this step resolves, without repeats
    pub advisory_ids: Vec<AdvisoryId>,
}
