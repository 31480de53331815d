pub mod action;
pub mod advisory;
pub mod audit_report;
pub mod severity;

pub use action::{Action, ActionKind};
pub use advisory::{Advisory, AdvisoryId, Finding};
pub use audit_report::{AuditReport, ReportSchema};
pub use severity::{Severity, SeverityThreshold};
