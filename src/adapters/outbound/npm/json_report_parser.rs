use super::schema::{
    LegacyReport, RawAuditReport, V2FixAvailable, V2Report, V2Via, V2Vulnerability,
};
use crate::audit::domain::{Action, Advisory, AdvisoryId, AuditReport, Finding, ReportSchema};
use crate::ports::outbound::{ProcessOutput, ReportParser};
use crate::shared::error::AuditError;
use crate::shared::Result;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Recommendation used when npm knows of no fix
pub const NO_FIX_AVAILABLE: &str = "No fix available";

/// NpmJsonReportParser adapter for `npm audit --json` output
///
/// Resolves the report shape once, right after parsing, and hands back a
/// normalized [`AuditReport`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NpmJsonReportParser;

impl NpmJsonReportParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses raw stdout of `npm audit --json`
    ///
    /// Empty input is a clean report; use [`ReportParser::parse`] to also
    /// take the exit status into account.
    pub fn parse_str(&self, stdout: &str) -> Result<AuditReport> {
        let trimmed = stdout.trim();
        // npm prints nothing when nothing meets the --audit-level floor
        if trimmed.is_empty() {
            return Ok(AuditReport::empty());
        }

        let value: Value = serde_json::from_str(trimmed).map_err(|e| parse_error(e, stdout))?;
        let raw = RawAuditReport::from_value(value).map_err(|e| parse_error(e, stdout))?;

        match raw {
            RawAuditReport::Failure(report) => Err(AuditError::AuditCommandFailed {
                code: report.error.code.unwrap_or_else(|| "unknown".to_string()),
                summary: report.error.summary,
                detail: if report.error.detail.is_empty() {
                    "Run `npm audit` in the project directory for details".to_string()
                } else {
                    report.error.detail
                },
            }
            .into()),
            RawAuditReport::V2(report) => Ok(normalize_v2(report)),
            RawAuditReport::Legacy(report) => Ok(normalize_legacy(report)),
        }
    }
}

impl ReportParser for NpmJsonReportParser {
    fn parse(&self, output: &ProcessOutput) -> Result<AuditReport> {
        if output.stdout.trim().is_empty() && !output.succeeded() {
            return Err(exited_without_report(output));
        }
        self.parse_str(&output.stdout)
    }
}

/// npm crashed or refused to run before printing any JSON
fn exited_without_report(output: &ProcessOutput) -> anyhow::Error {
    let status = match output.exit_code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    };
    let stderr = output.stderr.trim();
    AuditError::AuditCommandExited {
        status,
        stderr: if stderr.is_empty() {
            "(nothing on stderr)".to_string()
        } else {
            stderr.to_string()
        },
    }
    .into()
}

fn parse_error(details: impl ToString, raw_output: &str) -> anyhow::Error {
    AuditError::ReportParseError {
        details: details.to_string(),
        raw_output: raw_output.to_string(),
    }
    .into()
}

fn normalize_legacy(report: LegacyReport) -> AuditReport {
    let advisories = report
        .advisories
        .into_iter()
        .map(|(id, raw)| {
            let findings = raw
                .findings
                .into_iter()
                .map(|f| Finding::new(f.version, f.paths))
                .collect();
            Advisory::new(
                id,
                raw.severity,
                raw.title,
                raw.module_name,
                raw.overview,
                raw.recommendation,
                raw.url,
                findings,
            )
        })
        .collect();

    let actions = report
        .actions
        .into_iter()
        .map(|raw| {
            Action::new(
                raw.action,
                raw.module,
                raw.target,
                raw.is_major,
                raw.depth,
                raw.resolves.into_iter().map(|r| r.id).collect(),
            )
        })
        .collect();

    AuditReport::new(advisories, actions, ReportSchema::Legacy)
}

/// Folds each v2 vulnerability entry into one advisory
///
/// An entry's sources are the upstream advisories named in its `via` plus
/// every advisory reached by following `via` package names through the
/// report. The entry's ID is its first direct source not claimed by an
/// earlier entry. Entries without one are labelled with unused IDs above
/// every source; those labels are never sources themselves.
fn normalize_v2(report: V2Report) -> AuditReport {
    let mut resolved = resolve_sources(&report.vulnerabilities);
    let mut taken: HashSet<AdvisoryId> = resolved.values().flatten().copied().collect();
    let mut next_label = taken
        .iter()
        .max()
        .and_then(|max| max.checked_add(1))
        .unwrap_or(1);
    let mut claimed = HashSet::new();

    let advisories = report
        .vulnerabilities
        .into_iter()
        .map(|(key, vulnerability)| {
            let sources = resolved.remove(&key).unwrap_or_default();
            let direct = vulnerability
                .via
                .iter()
                .filter_map(|via| via.as_advisory())
                .map(|a| a.source)
                .find(|source| !claimed.contains(source));
            let id = match direct {
                Some(source) => {
                    claimed.insert(source);
                    source
                }
                None => allocate_label(&mut next_label, &mut taken),
            };
            v2_advisory(id, key, vulnerability, sources)
        })
        .collect();

    AuditReport::new(advisories, Vec::new(), ReportSchema::V2)
}

/// Maps every vulnerable package to the upstream advisories behind it
fn resolve_sources(
    vulnerabilities: &BTreeMap<String, V2Vulnerability>,
) -> HashMap<String, BTreeSet<AdvisoryId>> {
    vulnerabilities
        .keys()
        .map(|name| (name.clone(), collect_sources(name, vulnerabilities)))
        .collect()
}

fn collect_sources(
    name: &str,
    vulnerabilities: &BTreeMap<String, V2Vulnerability>,
) -> BTreeSet<AdvisoryId> {
    let mut sources = BTreeSet::new();
    let mut visited = HashSet::new();
    let mut pending = vec![name];

    while let Some(current) = pending.pop() {
        if !visited.insert(current) {
            continue;
        }
        let Some(vulnerability) = vulnerabilities.get(current) else {
            continue;
        };
        for via in &vulnerability.via {
            match via {
                V2Via::Advisory(advisory) => {
                    sources.insert(advisory.source);
                }
                V2Via::Package(dependency) => pending.push(dependency.as_str()),
            }
        }
    }

    sources
}

/// Next ID not used by any source or earlier label, skipping 0
fn allocate_label(next: &mut AdvisoryId, taken: &mut HashSet<AdvisoryId>) -> AdvisoryId {
    while *next == 0 || taken.contains(next) {
        *next = next.wrapping_add(1);
    }
    let label = *next;
    taken.insert(label);
    *next = next.wrapping_add(1);
    label
}

fn v2_advisory(
    id: AdvisoryId,
    key: String,
    vulnerability: V2Vulnerability,
    sources: BTreeSet<AdvisoryId>,
) -> Advisory {
    let name = vulnerability.name.clone().unwrap_or(key);
    let direct: Vec<_> = vulnerability
        .via
        .iter()
        .filter_map(|via| via.as_advisory())
        .collect();
    let primary = direct
        .iter()
        .find(|a| a.source == id)
        .or_else(|| direct.first())
        .copied();
    let via_packages: Vec<&str> = vulnerability
        .via
        .iter()
        .filter_map(|via| via.as_package_name())
        .collect();

    let title = match primary {
        Some(advisory) if !advisory.title.is_empty() && direct.len() > 1 => {
            format!("{} (and {} more)", advisory.title, direct.len() - 1)
        }
        Some(advisory) if !advisory.title.is_empty() => advisory.title.clone(),
        _ if !via_packages.is_empty() => {
            format!("Depends on vulnerable versions of {}", via_packages.join(", "))
        }
        _ => format!("Vulnerability in {}", name),
    };

    let range = if vulnerability.range.is_empty() {
        "(unknown range)"
    } else {
        vulnerability.range.as_str()
    };
    let mut overview = format!("{} {} is affected", name, range);
    if !via_packages.is_empty() {
        overview.push_str(&format!(" through {}", via_packages.join(", ")));
    }
    if !sources.is_empty() {
        let ids: Vec<String> = sources.iter().map(|id| id.to_string()).collect();
        let noun = if ids.len() == 1 { "advisory" } else { "advisories" };
        overview.push_str(&format!(" ({} {})", noun, ids.join(", ")));
    }

    let url = primary.map(|a| a.url.clone()).unwrap_or_default();
    let recommendation = fix_recommendation(vulnerability.fix_available.as_ref());
    let findings = vec![Finding::new(
        vulnerability.range.clone(),
        vulnerability.nodes.clone(),
    )];

    Advisory::new(
        id,
        vulnerability.severity,
        title,
        name,
        overview,
        recommendation,
        url,
        findings,
    )
    .with_sources(sources)
}

fn fix_recommendation(fix: Option<&V2FixAvailable>) -> String {
    match fix {
        None | Some(V2FixAvailable::Flag(false)) => NO_FIX_AVAILABLE.to_string(),
        Some(V2FixAvailable::Flag(true)) => "Fix available via `npm audit fix`".to_string(),
        Some(V2FixAvailable::Upgrade {
            name,
            version,
            is_sem_ver_major: true,
        }) => format!(
            "Fix available via `npm audit fix --force` (installs {}@{}, which is a breaking change)",
            name, version
        ),
        Some(V2FixAvailable::Upgrade { name, version, .. }) => format!(
            "Fix available via `npm audit fix` (installs {}@{})",
            name, version
        ),
    }
}
