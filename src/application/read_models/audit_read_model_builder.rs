//! Builder for constructing AuditReadModel from domain objects

use super::advisory_view::AdvisoryView;
use super::audit_read_model::{
    AuditMetadataView, AuditReadModel, AuditSummaryView, RemediationView,
};
use crate::audit::domain::{Action, AuditReport};
use crate::audit::services::FilterOutcome;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashSet;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing AuditReadModel from a report and its filter outcome
pub struct AuditReadModelBuilder;

impl AuditReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `report` - The normalized audit report
    /// * `outcome` - Result of applying the ignore list to `report`
    /// * `generated_at` - Time of the audit run
    pub fn build(
        report: &AuditReport,
        outcome: &FilterOutcome,
        generated_at: DateTime<Utc>,
    ) -> AuditReadModel {
        let advisories = outcome
            .pass_through_ids
            .iter()
            .filter_map(|id| report.advisory(*id))
            .map(AdvisoryView::from)
            .collect();

        AuditReadModel {
            metadata: AuditMetadataView {
                timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
            },
            summary: Self::build_summary(outcome),
            advisories,
        }
    }

    fn build_summary(outcome: &FilterOutcome) -> AuditSummaryView {
        let pass_through: HashSet<_> = outcome.pass_through_ids.iter().copied().collect();
        let remediations = outcome
            .pass_through_actions
            .iter()
            .map(|action| Self::build_remediation(action, &pass_through))
            .collect();

        AuditSummaryView {
            advisory_count: outcome.pass_through_ids.len(),
            ignored_count: outcome.ignored_ids.len(),
            remediations,
        }
    }

    fn build_remediation(action: &Action, pass_through: &HashSet<u64>) -> RemediationView {
        RemediationView {
            kind: action.kind(),
            module: action.module().to_string(),
            target: action.target().map(str::to_string),
            depth: action.depth(),
            is_major: action.is_major(),
            advisory_ids: action
                .unique_resolves()
                .into_iter()
                .filter(|id| pass_through.contains(id))
                .collect(),
        }
    }
}
