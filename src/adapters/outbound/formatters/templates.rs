//! Text templates shared by the console and JUnit formatters

use crate::application::read_models::{AdvisoryView, AuditSummaryView, RemediationView};
use crate::audit::domain::ActionKind;

const NOT_AVAILABLE: &str = "N/A";

/// `HIGH: 118 - Regular Expression Denial of Service`
pub fn advisory_title(advisory: &AdvisoryView) -> String {
    format!(
        "{}: {} - {}",
        advisory.severity.label(),
        advisory.id,
        advisory.title
    )
}

/// Detailed description of one advisory
pub fn advisory_summary(advisory: &AdvisoryView) -> String {
    let mut path = advisory
        .path
        .clone()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    if advisory.additional_paths > 0 {
        path.push_str(&format!(" (and {} more)", advisory.additional_paths));
    }

    format!(
        "{}\n\n{}\n\nModule:    {}\nVersion:   {}\nPath:      {}\nMore info: {}",
        advisory.overview,
        advisory.recommendation,
        or_not_available(&advisory.module_name),
        advisory.version.as_deref().unwrap_or(NOT_AVAILABLE),
        path,
        or_not_available(&advisory.url),
    )
}

/// Counts plus the list of recommended actions
pub fn audit_summary(summary: &AuditSummaryView) -> String {
    let mut text = format!(
        "Summary\n\nAdvisories: {}\nIgnored:    {}\n",
        summary.advisory_count, summary.ignored_count
    );

    if !summary.remediations.is_empty() {
        text.push_str("\nRecommended Actions\n\n");
        let lines: Vec<String> = summary.remediations.iter().map(remediation_line).collect();
        text.push_str(&lines.join("\n"));
    }

    text
}

pub fn remediation_line(remediation: &RemediationView) -> String {
    let ids = remediation
        .advisory_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let command = match (
        remediation.kind,
        remediation.target.as_deref(),
        remediation.depth,
    ) {
        (ActionKind::Review, _, _) | (_, None, _) => {
            return format!(
                "Manually review {} to resolve these advisories: {}",
                remediation.module, ids
            );
        }
        (ActionKind::Update, Some(_), Some(depth)) => {
            format!("npm update {} --depth {}", remediation.module, depth)
        }
        (kind, Some(target), _) => {
            format!("npm {} {}@{}", kind.as_str(), remediation.module, target)
        }
    };

    let mut line = format!("Run `{}` to resolve these advisories: {}", command, ids);
    if remediation.is_major {
        line.push_str(" (SemVer major, may introduce breaking changes)");
    }
    line
}

fn or_not_available(value: &str) -> &str {
    if value.is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}
