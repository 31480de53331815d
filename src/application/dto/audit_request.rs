use crate::audit::domain::{AdvisoryId, SeverityThreshold};
use crate::ports::outbound::AuditCommand;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// AuditRequest - Internal request DTO for the audit use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    /// Directory containing package.json and package-lock.json
    pub project_path: PathBuf,
    /// Advisory IDs to leave out of the report and the exit code
    pub ignore_ids: Vec<AdvisoryId>,
    /// Why individual advisories are ignored, shown in progress output
    pub ignore_reasons: BTreeMap<AdvisoryId, String>,
    /// Restrict the audit to production dependencies
    pub production: bool,
    /// Minimum severity npm should report on
    pub threshold: Option<SeverityThreshold>,
}

impl AuditRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            ignore_ids: Vec::new(),
            ignore_reasons: BTreeMap::new(),
            production: false,
            threshold: None,
        }
    }

    pub fn with_ignore_ids(mut self, ignore_ids: Vec<AdvisoryId>) -> Self {
        self.ignore_ids = ignore_ids;
        self
    }

    pub fn with_ignore_reasons(mut self, ignore_reasons: BTreeMap<AdvisoryId, String>) -> Self {
        self.ignore_reasons = ignore_reasons;
        self
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn with_threshold(mut self, threshold: Option<SeverityThreshold>) -> Self {
        self.threshold = threshold;
        self
    }

    /// The subprocess invocation this request maps to
    pub fn audit_command(&self) -> AuditCommand {
        AuditCommand::new(self.project_path.clone(), self.production, self.threshold)
    }
}
