use super::action::Action;
use super::advisory::Advisory;
use std::fmt;

/// Which npm report layout the advisories were read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSchema {
    /// npm 6 style: `advisories` keyed by ID plus an `actions` list
    Legacy,
    /// npm 7+ style: `vulnerabilities` keyed by package name
    V2,
    /// npm printed nothing at all
    Empty,
}

impl fmt::Display for ReportSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSchema::Legacy => write!(f, "legacy"),
            ReportSchema::V2 => write!(f, "v2"),
            ReportSchema::Empty => write!(f, "empty"),
        }
    }
}

/// Normalized audit result, independent of the npm schema it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    advisories: Vec<Advisory>,
    actions: Vec<Action>,
    schema: ReportSchema,
}

impl AuditReport {
    pub fn new(advisories: Vec<Advisory>, actions: Vec<Action>, schema: ReportSchema) -> Self {
        Self {
            advisories,
            actions,
            schema,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), ReportSchema::Empty)
    }

    /// Advisories in source order
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn schema(&self) -> ReportSchema {
        self.schema
    }

    pub fn advisory(&self, id: u64) -> Option<&Advisory> {
        self.advisories.iter().find(|a| a.id() == id)
    }
}
