use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Build pipelines only distinguish zero from non-zero, so every failure
/// collapses to 1 alongside the "advisories found" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success - no advisories remain after applying the ignore list
    Success,
    /// At least one advisory passed through the ignore list
    AdvisoriesFound,
    /// Invalid arguments, unparseable audit output, I/O errors, etc.
    Failure,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::AdvisoriesFound | ExitCode::Failure => 1,
        }
    }

    /// Maps the number of pass-through advisories to the process exit code
    pub fn from_pass_through_count(count: usize) -> Self {
        if count > 0 {
            ExitCode::AdvisoriesFound
        } else {
            ExitCode::Success
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AdvisoriesFound => write!(f, "Advisories Found (1)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
        }
    }
}

/// Application-specific errors for running and reporting an npm audit.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory containing package.json and package-lock.json")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Invalid severity threshold: '{value}'\n\n💡 Hint: Use one of info, low, moderate, high, critical or none")]
    InvalidSeverityThreshold { value: String },

    #[error("Invalid advisory ID to ignore: '{value}'\n\n💡 Hint: Advisory IDs are positive integers, separated by commas (e.g. 118,577)")]
    InvalidIgnoreId { value: String },

    #[error("Failed to run `{command}`\nDetails: {details}\n\n💡 Hint: Make sure npm is installed and available on PATH, or pass --npm <PATH>")]
    CommandSpawnFailed { command: String, details: String },

    #[error("npm audit reported an error ({code}): {summary}\n\n💡 Hint: {detail}")]
    AuditCommandFailed {
        code: String,
        summary: String,
        detail: String,
    },

    #[error("npm audit exited with {status} without printing a report\n\nnpm output:\n{stderr}\n\n💡 Hint: Run `npm audit` in the project directory to see the full error")]
    AuditCommandExited { status: String, stderr: String },

    #[error("Failed to parse npm audit output\nDetails: {details}\n\nRaw output:\n{raw_output}")]
    ReportParseError { details: String, raw_output: String },

    #[error("npm audit output is too large ({size} bytes). Maximum allowed size is {max} bytes.")]
    OutputTooLarge { size: usize, max: usize },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}")]
    ConfigError { path: PathBuf, details: String },
}
