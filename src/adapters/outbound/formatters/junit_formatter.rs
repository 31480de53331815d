use super::templates::{advisory_summary, advisory_title, audit_summary};
use crate::application::read_models::{AdvisoryView, AuditReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const SUMMARY_SUITE: &str = "NPM Audit Summary";
const ADVISORIES_SUITE: &str = "NPM Audit Advisories";

/// JunitFormatter adapter for JUnit-compatible XML output
///
/// Produces two suites: a single summary test case that fails when any
/// advisory passed the ignore list, and one failing test case per
/// pass-through advisory.
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_summary_suite(&self, output: &mut String, model: &AuditReadModel) {
        let summary = &model.summary;
        let failed = summary.advisory_count > 0;

        output.push_str(&format!(
            "  <testsuite name=\"{}\" tests=\"1\" failures=\"{}\" errors=\"0\" skipped=\"0\" timestamp=\"{}\">\n",
            SUMMARY_SUITE,
            usize::from(failed),
            escape_xml(&model.metadata.timestamp)
        ));
        output.push_str("    <properties>\n");
        for (name, value) in [
            ("advisories", summary.advisory_count),
            ("ignored", summary.ignored_count),
        ] {
            output.push_str(&format!(
                "      <property name=\"{}\" value=\"{}\"/>\n",
                name, value
            ));
        }
        output.push_str("    </properties>\n");

        output.push_str("    <testcase name=\"Summary\" classname=\"npm-audit.summary\">\n");
        let text = escape_xml(&audit_summary(summary));
        if failed {
            output.push_str(&format!(
                "      <failure message=\"{} advisories found\" type=\"AUDIT\">{}</failure>\n",
                summary.advisory_count, text
            ));
        } else {
            output.push_str(&format!("      <system-out>{}</system-out>\n", text));
        }
        output.push_str("    </testcase>\n");
        output.push_str("  </testsuite>\n");
    }

    fn render_advisories_suite(&self, output: &mut String, model: &AuditReadModel) {
        let count = model.advisories.len();
        let open = format!(
            "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"0\" timestamp=\"{}\"",
            ADVISORIES_SUITE,
            count,
            count,
            escape_xml(&model.metadata.timestamp)
        );

        if model.advisories.is_empty() {
            output.push_str(&open);
            output.push_str("/>\n");
            return;
        }

        output.push_str(&open);
        output.push_str(">\n");
        for advisory in &model.advisories {
            self.render_advisory(output, advisory);
        }
        output.push_str("  </testsuite>\n");
    }

    fn render_advisory(&self, output: &mut String, advisory: &AdvisoryView) {
        output.push_str(&format!(
            "    <testcase name=\"{}\" classname=\"npm-audit.{}\">\n",
            escape_xml(&advisory_title(advisory)),
            escape_xml(&advisory.module_name)
        ));
        output.push_str(&format!(
            "      <failure message=\"{}\" type=\"{}\">{}</failure>\n",
            escape_xml(&advisory.title),
            advisory.severity.label(),
            escape_xml(&advisory_summary(advisory))
        ));
        output.push_str("    </testcase>\n");
    }
}

impl Default for JunitFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JunitFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let tests = 1 + model.advisories.len();
        let failures = usize::from(model.summary.advisory_count > 0) + model.advisories.len();

        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<testsuites name=\"{} {}\" tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
            escape_xml(&model.metadata.tool_name),
            escape_xml(&model.metadata.tool_version),
            tests,
            failures
        ));
        self.render_summary_suite(&mut output, model);
        self.render_advisories_suite(&mut output, model);
        output.push_str("</testsuites>\n");

        Ok(output)
    }
}

/// Escapes text for XML content and attribute values
///
/// Control characters that XML 1.0 cannot represent are dropped.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c.is_control() => {}
            c => escaped.push(c),
        }
    }
    escaped
}
