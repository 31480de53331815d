/// npm adapters: subprocess execution and `npm audit --json` parsing
mod json_report_parser;
mod npm_audit_runner;
mod schema;

pub use json_report_parser::{NpmJsonReportParser, NO_FIX_AVAILABLE};
pub use npm_audit_runner::{NpmAuditRunner, DEFAULT_NPM};
