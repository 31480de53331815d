use crate::application::dto::{AuditRequest, AuditResponse};
use crate::audit::domain::AuditReport;
use crate::audit::services::{AdvisoryFilter, FilterOutcome};
use crate::ports::outbound::{AuditRunner, ProcessOutput, ProgressReporter, ReportParser};
use crate::shared::Result;
use chrono::Utc;

/// RunAuditUseCase - Core use case for auditing a project
///
/// Invokes the audit command once, normalizes its JSON report and applies
/// the ignore list. Rendering is left to the caller.
///
/// # Type Parameters
/// * `R` - AuditRunner implementation
/// * `P` - ReportParser implementation
/// * `PR` - ProgressReporter implementation
pub struct RunAuditUseCase<R, P, PR> {
    audit_runner: R,
    report_parser: P,
    progress_reporter: PR,
}

impl<R, P, PR> RunAuditUseCase<R, P, PR>
where
    R: AuditRunner,
    P: ReportParser,
    PR: ProgressReporter,
{
    /// Creates a new RunAuditUseCase with injected dependencies
    pub fn new(audit_runner: R, report_parser: P, progress_reporter: PR) -> Self {
        Self {
            audit_runner,
            report_parser,
            progress_reporter,
        }
    }

    /// Executes the audit use case
    ///
    /// # Arguments
    /// * `request` - Project path, ignore list and npm flags
    ///
    /// # Returns
    /// AuditResponse holding the normalized report and the ignore-list outcome
    ///
    /// # Errors
    /// Returns an error if the audit command cannot be run or its output
    /// cannot be parsed. A non-zero exit of the audit command is expected
    /// when vulnerabilities exist and is not an error.
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Run npm audit
        let output = self.run_audit(&request).await?;

        // Step 2: Normalize the JSON report
        let report = self.parse_and_report(&output)?;

        // Step 3: Apply the ignore list
        let outcome = self.apply_ignore_list(&report, &request);

        Ok(AuditResponse::new(report, outcome, Utc::now()))
    }

    async fn run_audit(&self, request: &AuditRequest) -> Result<ProcessOutput> {
        let command = request.audit_command();
        self.progress_reporter.report(&format!(
            "🔍 Auditing dependencies in: {}",
            command.project_path.display()
        ));

        self.progress_reporter
            .start_task(&format!("Running npm {}", command.args().join(" ")));
        let result = self.audit_runner.run(&command).await;
        self.progress_reporter.finish_task();

        result
    }

    fn parse_and_report(&self, output: &ProcessOutput) -> Result<AuditReport> {
        let report = self.report_parser.parse(output)?;
        self.progress_reporter.report(&format!(
            "✅ Parsed {} report with {} advisory(ies)",
            report.schema(),
            report.advisories().len()
        ));
        Ok(report)
    }

    fn apply_ignore_list(&self, report: &AuditReport, request: &AuditRequest) -> FilterOutcome {
        let filter = AdvisoryFilter::new(request.ignore_ids.iter().copied());
        let outcome = filter.apply(report);

        if !outcome.ignored_ids.is_empty() {
            self.progress_reporter.report(&format!(
                "🚫 Ignored {} advisory(ies) based on the ignore list",
                outcome.ignored_ids.len()
            ));
        }

        for id in &request.ignore_ids {
            if outcome.unmatched_ignore_ids.contains(id) {
                continue;
            }
            if let Some(reason) = request.ignore_reasons.get(id) {
                self.progress_reporter
                    .report(&format!("   Advisory {} ignored: {}", id, reason));
            }
        }

        for id in &outcome.unmatched_ignore_ids {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Ignored advisory {} was not found in the audit report.",
                id
            ));
        }

        outcome
    }
}
