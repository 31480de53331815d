use super::audit_runner::ProcessOutput;
use crate::audit::domain::AuditReport;
use crate::shared::Result;

/// ReportParser port for turning captured audit output into an [`AuditReport`]
///
/// Implementations absorb every schema difference of the underlying tool;
/// callers only ever see the normalized report.
pub trait ReportParser {
    /// Parses the captured output of one audit run
    ///
    /// # Errors
    /// Returns an error if:
    /// - stdout is not empty and is not valid JSON of a known shape
    /// - the audit tool reported its own error document
    fn parse(&self, output: &ProcessOutput) -> Result<AuditReport>;
}
