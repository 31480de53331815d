/// Audit domain layer
///
/// Pure types and filtering logic for npm audit results. Nothing in here
/// knows about subprocesses, report schemas or output formats.
pub mod domain;
pub mod services;
