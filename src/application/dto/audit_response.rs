use crate::audit::domain::AuditReport;
use crate::audit::services::FilterOutcome;
use crate::shared::error::ExitCode;
use chrono::{DateTime, Utc};

/// AuditResponse - Internal response DTO from the audit use case
///
/// Carries the normalized report together with the ignore-list outcome;
/// adapters turn it into a read model and render it.
#[derive(Debug, Clone)]
pub struct AuditResponse {
    pub report: AuditReport,
    pub outcome: FilterOutcome,
    pub generated_at: DateTime<Utc>,
}

impl AuditResponse {
    pub fn new(
        report: AuditReport,
        outcome: FilterOutcome,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            report,
            outcome,
            generated_at,
        }
    }

    /// Exit code for the whole run: non-zero iff any advisory passed the ignore list
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from_pass_through_count(self.outcome.pass_through_ids.len())
    }
}
