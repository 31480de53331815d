use crate::audit::domain::SeverityThreshold;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Parameters for one invocation of the audit command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditCommand {
    /// Directory containing package.json and package-lock.json
    pub project_path: PathBuf,
    /// Restrict the audit to production dependencies
    pub production: bool,
    /// Minimum severity npm should report on
    pub threshold: Option<SeverityThreshold>,
}

impl AuditCommand {
    pub fn new(
        project_path: PathBuf,
        production: bool,
        threshold: Option<SeverityThreshold>,
    ) -> Self {
        Self {
            project_path,
            production,
            threshold,
        }
    }

    /// Arguments passed to npm, without the executable itself
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["audit".to_string(), "--json".to_string()];
        if self.production {
            args.push("--production".to_string());
        }
        if let Some(threshold) = self.threshold {
            args.push(threshold.as_npm_arg());
        }
        args
    }
}

/// Captured result of a subprocess run
///
/// Filled the same way whether the process exited zero or not: npm audit
/// exits non-zero whenever it finds vulnerabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn new(stdout: String, stderr: String, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// AuditRunner port for executing the external audit command
///
/// # Async Support
/// The only suspension point of a run is waiting for the subprocess.
#[async_trait]
pub trait AuditRunner: Send + Sync {
    /// Runs the audit command and captures its output
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned or its output
    /// exceeds the configured size limit. A non-zero exit status is NOT
    /// an error.
    async fn run(&self, command: &AuditCommand) -> Result<ProcessOutput>;
}
