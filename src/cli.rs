use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::npm::DEFAULT_NPM;
use crate::audit::domain::AdvisoryId;
use crate::config::CliOptions;
use crate::shared::error::AuditError;

/// Run `npm audit` and report the results as text or JUnit XML
#[derive(Parser, Debug)]
#[command(name = "npm-audit-report")]
#[command(version)]
#[command(
    about = "Run npm audit and report the results as text or JUnit XML",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub project: PathBuf,

    /// Advisory IDs to ignore, comma-separated.
    /// Can be specified multiple times: -i 118,577 -i 1179
    #[arg(
        short,
        long = "ignore",
        value_name = "IDS",
        value_delimiter = ',',
        value_parser = parse_advisory_id
    )]
    pub ignore: Vec<AdvisoryId>,

    /// Output a JUnit-compatible XML report
    #[arg(short = 'x', long)]
    pub xml: bool,

    /// Only audit production dependencies
    #[arg(long)]
    pub production: bool,

    /// Minimum severity to report: info, low, moderate, high, critical or none
    #[arg(short = 'l', long = "audit-level", value_name = "LEVEL")]
    pub audit_level: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to npm-audit-report.config.yml in the project)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// npm executable used to run the audit
    #[arg(long, value_name = "PATH", default_value = DEFAULT_NPM)]
    pub npm: PathBuf,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Options that may be complemented by a config file
    pub fn cli_options(&self) -> CliOptions {
        CliOptions {
            xml: self.xml,
            production: self.production,
            audit_level: self.audit_level.clone(),
            ignore_ids: self.ignore.clone(),
        }
    }
}

/// Parses one entry of the `--ignore` list
pub fn parse_advisory_id(value: &str) -> Result<AdvisoryId, AuditError> {
    match value.trim().parse::<AdvisoryId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AuditError::InvalidIgnoreId {
            value: value.to_string(),
        }),
    }
}
