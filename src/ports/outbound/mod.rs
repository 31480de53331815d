/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (npm, file system, console, etc.).
pub mod audit_runner;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_parser;

pub use audit_runner::{AuditCommand, AuditRunner, ProcessOutput};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_parser::ReportParser;
