use async_trait::async_trait;
use npm_audit_report::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock AuditRunner that replays canned npm output and records invocations
#[derive(Clone)]
pub struct MockAuditRunner {
    output: ProcessOutput,
    pub commands: Arc<Mutex<Vec<AuditCommand>>>,
}

impl MockAuditRunner {
    /// npm exits 1 whenever it prints vulnerabilities
    pub fn new(stdout: impl Into<String>) -> Self {
        Self::with_exit_code(stdout, 1)
    }

    pub fn with_exit_code(stdout: impl Into<String>, exit_code: i32) -> Self {
        Self {
            output: ProcessOutput::new(stdout.into(), String::new(), Some(exit_code)),
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// npm output with nothing on stdout, as when npm fails before auditing
    #[allow(dead_code)]
    pub fn failed(stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            output: ProcessOutput::new(String::new(), stderr.into(), Some(exit_code)),
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn from_fixture(name: &str) -> Self {
        let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
        let content = std::fs::read_to_string(&path).unwrap();
        Self::new(content)
    }

    #[allow(dead_code)]
    pub fn recorded_commands(&self) -> Vec<AuditCommand> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditRunner for MockAuditRunner {
    async fn run(&self, command: &AuditCommand) -> Result<ProcessOutput> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(self.output.clone())
    }
}
