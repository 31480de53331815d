use super::advisory::AdvisoryId;
use serde::Deserialize;
use std::collections::HashSet;

/// Kind of remediation npm recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Install,
    Update,
    Review,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Install => "install",
            ActionKind::Update => "update",
            ActionKind::Review => "review",
        }
    }
}

/// A remediation step that resolves one or more advisories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    kind: ActionKind,
    module: String,
    target: Option<String>,
    is_major: bool,
    depth: Option<u32>,
    resolves: Vec<AdvisoryId>,
}

impl Action {
    pub fn new(
        kind: ActionKind,
        module: String,
        target: Option<String>,
        is_major: bool,
        depth: Option<u32>,
        resolves: Vec<AdvisoryId>,
    ) -> Self {
        Self {
            kind,
            module,
            target,
            is_major,
            depth,
            resolves,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_major(&self) -> bool {
        self.is_major
    }

    pub fn depth(&self) -> Option<u32> {
        self.depth
    }

    /// Advisory IDs as listed by npm; one ID per resolved path, so repeats are common
    pub fn resolves(&self) -> &[AdvisoryId] {
        &self.resolves
    }

    /// Resolved advisory IDs without repeats, in first-occurrence order
    pub fn unique_resolves(&self) -> Vec<AdvisoryId> {
        let mut seen = HashSet::new();
        self.resolves
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}
