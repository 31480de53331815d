//! Configuration file support for npm-audit-report.
//!
//! Provides YAML-based configuration through `npm-audit-report.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::audit::domain::{AdvisoryId, SeverityThreshold};
use crate::shared::error::AuditError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-audit-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub xml: Option<bool>,
    pub production: Option<bool>,
    pub audit_level: Option<String>,
    pub ignore_advisories: Option<Vec<IgnoreAdvisory>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// An advisory to leave out of the report and the exit code.
#[derive(Debug, Deserialize)]
pub struct IgnoreAdvisory {
    pub id: AdvisoryId,
    pub reason: Option<String>,
}

impl ConfigFile {
    /// Advisory IDs listed under `ignore_advisories`, in file order
    pub fn ignore_ids(&self) -> Vec<AdvisoryId> {
        self.ignore_advisories
            .iter()
            .flatten()
            .map(|entry| entry.id)
            .collect()
    }

    /// Reasons recorded next to ignored advisory IDs
    pub fn ignore_reasons(&self) -> BTreeMap<AdvisoryId, String> {
        self.ignore_advisories
            .iter()
            .flatten()
            .filter_map(|entry| entry.reason.clone().map(|reason| (entry.id, reason)))
            .collect()
    }
}

/// Options given on the command line that a config file may complement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub xml: bool,
    pub production: bool,
    pub audit_level: Option<String>,
    pub ignore_ids: Vec<AdvisoryId>,
}

/// Effective settings after merging command-line flags with a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSettings {
    pub xml: bool,
    pub production: bool,
    pub threshold: Option<SeverityThreshold>,
    pub ignore_ids: Vec<AdvisoryId>,
    pub ignore_reasons: BTreeMap<AdvisoryId, String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null, which is not a mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads the explicit config when given, otherwise looks in the project directory.
pub fn resolve_config(explicit: Option<&Path>, project_dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                validate_regular_file(path, "config file")?;
            }
            load_config_from_path(path).map(Some)
        }
        None => discover_config(project_dir),
    }
}

/// Merges command-line options with an optional config file.
///
/// Booleans are enabled when either side enables them, the command-line
/// audit level overrides the config value and ignore lists are unioned
/// with command-line IDs first.
pub fn merge(cli: CliOptions, config: Option<&ConfigFile>) -> Result<MergedSettings> {
    let audit_level = cli
        .audit_level
        .or_else(|| config.and_then(|c| c.audit_level.clone()));
    let threshold = audit_level
        .as_deref()
        .map(SeverityThreshold::from_str)
        .transpose()?;

    let mut ignore_ids = cli.ignore_ids;
    if let Some(config) = config {
        for id in config.ignore_ids() {
            if !ignore_ids.contains(&id) {
                ignore_ids.push(id);
            }
        }
    }

    Ok(MergedSettings {
        xml: cli.xml || config.and_then(|c| c.xml).unwrap_or(false),
        production: cli.production || config.and_then(|c| c.production).unwrap_or(false),
        threshold,
        ignore_ids,
        ignore_reasons: config.map(ConfigFile::ignore_reasons).unwrap_or_default(),
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let config_error = |details: String| AuditError::ConfigError {
        path: PathBuf::from(path),
        details,
    };

    if let Some(ref level) = config.audit_level {
        if SeverityThreshold::from_str(level).is_err() {
            return Err(config_error(format!(
                "audit_level '{}' is not one of {}",
                level,
                SeverityThreshold::VALUES.join(", ")
            ))
            .into());
        }
    }

    if let Some(ref ignore_advisories) = config.ignore_advisories {
        for (i, entry) in ignore_advisories.iter().enumerate() {
            if entry.id == 0 {
                return Err(config_error(format!(
                    "ignore_advisories[{}].id must be a positive advisory ID",
                    i
                ))
                .into());
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
