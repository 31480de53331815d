use super::severity::Severity;

/// Numeric advisory identifier, unique within one report
pub type AdvisoryId = u64;

/// One place where a vulnerable version of a module was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub version: String,
    pub paths: Vec<String>,
}

impl Finding {
    pub fn new(version: String, paths: Vec<String>) -> Self {
        Self { version, paths }
    }
}

/// A single reported vulnerability affecting a dependency
///
/// Advisories are built once from the audit output and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    id: AdvisoryId,
    severity: Severity,
    title: String,
    module_name: String,
    overview: String,
    recommendation: String,
    url: String,
    findings: Vec<Finding>,
    /// Upstream advisory IDs this entry is ignored by, ascending
    sources: Vec<AdvisoryId>,
}

impl Advisory {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AdvisoryId,
        severity: Severity,
        title: String,
        module_name: String,
        overview: String,
        recommendation: String,
        url: String,
        findings: Vec<Finding>,
    ) -> Self {
        Self {
            id,
            severity,
            title,
            module_name,
            overview,
            recommendation,
            url,
            findings,
            sources: vec![id],
        }
    }

    /// Replaces the IDs an ignore list has to name to suppress this entry
    ///
    /// An empty set means no ignore entry can suppress it.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = AdvisoryId>) -> Self {
        let mut sources: Vec<AdvisoryId> = sources.into_iter().collect();
        sources.sort_unstable();
        sources.dedup();
        self.sources = sources;
        self
    }

    pub fn id(&self) -> AdvisoryId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn sources(&self) -> &[AdvisoryId] {
        &self.sources
    }

    /// Version range of the first finding, if any
    pub fn first_version(&self) -> Option<&str> {
        self.findings.first().map(|f| f.version.as_str())
    }

    /// First dependency path of the first finding, if any
    pub fn first_path(&self) -> Option<&str> {
        self.findings
            .first()
            .and_then(|f| f.paths.first())
            .map(String::as_str)
    }
}
