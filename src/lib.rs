//! npm-audit-report - CI-friendly reporting for `npm audit`
//!
//! This library runs `npm audit --json`, normalizes both report schemas npm
//! has shipped, applies an advisory ignore list and renders the result as a
//! console report or a JUnit-compatible XML document. The process exit code
//! is the signal build pipelines act on.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`audit`): Advisory, action and report models plus the ignore-list filter
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): npm subprocess, JSON parsing, formatters and presenters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_audit_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create use case
//! let use_case = RunAuditUseCase::new(
//!     NpmAuditRunner::new(),
//!     NpmJsonReportParser::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = AuditRequest::new(PathBuf::from(".")).with_ignore_ids(vec![118]);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let model =
//!     AuditReadModelBuilder::build(&response.report, &response.outcome, response.generated_at);
//! let output = JunitFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JunitFormatter, TextFormatter};
    pub use crate::adapters::outbound::npm::{NpmAuditRunner, NpmJsonReportParser};
    pub use crate::application::dto::{AuditRequest, AuditResponse, OutputFormat};
    pub use crate::application::read_models::{AuditReadModel, AuditReadModelBuilder};
    pub use crate::application::use_cases::RunAuditUseCase;
    pub use crate::audit::domain::{
        Action, ActionKind, Advisory, AdvisoryId, AuditReport, Severity, SeverityThreshold,
    };
    pub use crate::audit::services::{AdvisoryFilter, FilterOutcome};
    pub use crate::ports::outbound::{
        AuditCommand, AuditRunner, OutputPresenter, ProcessOutput, ProgressReporter,
        ReportFormatter, ReportParser,
    };
    pub use crate::shared::error::{AuditError, ExitCode};
    pub use crate::shared::Result;
}
