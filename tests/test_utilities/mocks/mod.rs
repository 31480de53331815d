/// Mock implementations for testing
mod mock_audit_runner;
mod mock_progress_reporter;

pub use mock_audit_runner::MockAuditRunner;
pub use mock_progress_reporter::MockProgressReporter;
