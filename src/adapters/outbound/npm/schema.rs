//! Serde models for the JSON printed by `npm audit --json`.
//!
//! Two report layouts exist in the wild. npm 6 prints advisories keyed by
//! numeric ID together with a list of remediation actions; npm 7 and later
//! print `auditReportVersion: 2` with vulnerabilities keyed by package name.
//! Either command may instead print an `{"error": {...}}` document.

use crate::audit::domain::{ActionKind, Severity};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Every document shape `npm audit --json` is known to print
#[derive(Debug)]
pub enum RawAuditReport {
    Failure(NpmErrorReport),
    V2(V2Report),
    Legacy(LegacyReport),
}

impl RawAuditReport {
    /// Picks the report shape from the document's top-level keys
    pub fn from_value(value: Value) -> Result<Self, String> {
        let shape = match &value {
            Value::Object(map) if map.contains_key("error") => "error",
            Value::Object(map)
                if map.contains_key("auditReportVersion") || map.contains_key("vulnerabilities") =>
            {
                "v2"
            }
            Value::Object(map) if map.contains_key("advisories") => "legacy",
            Value::Object(_) => {
                return Err(
                    "unrecognized report: expected an 'advisories' or 'vulnerabilities' object"
                        .to_string(),
                )
            }
            _ => return Err("unrecognized report: top-level value is not an object".to_string()),
        };

        let parsed = match shape {
            "error" => serde_json::from_value(value).map(RawAuditReport::Failure),
            "v2" => serde_json::from_value(value).map(RawAuditReport::V2),
            _ => serde_json::from_value(value).map(RawAuditReport::Legacy),
        };
        parsed.map_err(|e| format!("invalid {} report: {}", shape, e))
    }
}

#[derive(Debug, Deserialize)]
pub struct NpmErrorReport {
    pub error: NpmError,
}

#[derive(Debug, Deserialize)]
pub struct NpmError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub detail: String,
}

// ---------------------------------------------------------------------------
// Legacy (npm 6)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LegacyReport {
    /// Keyed by advisory ID; BTreeMap keeps ascending ID order
    pub advisories: BTreeMap<u64, LegacyAdvisory>,
    #[serde(default)]
    pub actions: Vec<LegacyAction>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyAdvisory {
    pub severity: Severity,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub findings: Vec<LegacyFinding>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyFinding {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub paths: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyAction {
    pub action: ActionKind,
    pub module: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(rename = "isMajor", default)]
    pub is_major: bool,
    #[serde(default)]
    pub depth: Option<u32>,
    #[serde(default)]
    pub resolves: Vec<LegacyResolve>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyResolve {
    pub id: u64,
}

// ---------------------------------------------------------------------------
// Version 2 (npm 7+)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct V2Report {
    #[serde(rename = "auditReportVersion", default)]
    pub audit_report_version: Option<u32>,
    /// Keyed by package name
    #[serde(default)]
    pub vulnerabilities: BTreeMap<String, V2Vulnerability>,
}

#[derive(Debug, Deserialize)]
pub struct V2Vulnerability {
    #[serde(default)]
    pub name: Option<String>,
    pub severity: Severity,
    #[serde(default)]
    pub via: Vec<V2Via>,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(rename = "fixAvailable", default)]
    pub fix_available: Option<V2FixAvailable>,
}

/// A `via` entry is either the advisory itself or the name of another
/// vulnerable package this one depends on
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum V2Via {
    Advisory(V2ViaAdvisory),
    Package(String),
}

impl V2Via {
    pub fn as_advisory(&self) -> Option<&V2ViaAdvisory> {
        match self {
            V2Via::Advisory(advisory) => Some(advisory),
            V2Via::Package(_) => None,
        }
    }

    pub fn as_package_name(&self) -> Option<&str> {
        match self {
            V2Via::Advisory(_) => None,
            V2Via::Package(name) => Some(name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct V2ViaAdvisory {
    pub source: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum V2FixAvailable {
    Flag(bool),
    Upgrade {
        name: String,
        version: String,
        #[serde(rename = "isSemVerMajor", default)]
        is_sem_ver_major: bool,
    },
}
