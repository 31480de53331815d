use crate::shared::error::AuditError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Advisory severity as reported by npm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Uppercased label used in advisory titles and JUnit failure types
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum severity passed to `npm audit --audit-level`
///
/// `None` is a valid npm level in its own right, distinct from not passing
/// the flag at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityThreshold {
    Info,
    Low,
    Moderate,
    High,
    Critical,
    None,
}

impl SeverityThreshold {
    pub const VALUES: [&'static str; 6] = ["info", "low", "moderate", "high", "critical", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityThreshold::Info => "info",
            SeverityThreshold::Low => "low",
            SeverityThreshold::Moderate => "moderate",
            SeverityThreshold::High => "high",
            SeverityThreshold::Critical => "critical",
            SeverityThreshold::None => "none",
        }
    }

    /// Returns the `--audit-level=<level>` argument for npm
    pub fn as_npm_arg(&self) -> String {
        format!("--audit-level={}", self.as_str())
    }
}

impl FromStr for SeverityThreshold {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(SeverityThreshold::Info),
            "low" => Ok(SeverityThreshold::Low),
            "moderate" => Ok(SeverityThreshold::Moderate),
            "high" => Ok(SeverityThreshold::High),
            "critical" => Ok(SeverityThreshold::Critical),
            "none" => Ok(SeverityThreshold::None),
            _ => Err(AuditError::InvalidSeverityThreshold {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SeverityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
