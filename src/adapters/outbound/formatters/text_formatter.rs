use super::templates::{advisory_summary, advisory_title, audit_summary};
use crate::adapters::outbound::console::DEFAULT_TERMINAL_WIDTH;
use crate::application::read_models::AuditReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const REPORT_TITLE: &str = "NPM Audit Security Report";

/// Narrowest layout we render; anything below is widened to this
const MIN_WIDTH: usize = 20;

/// TextFormatter adapter for the human-readable console report
///
/// Rules and the centered banner are sized to the given width; advisory
/// details are word-wrapped two columns narrower.
pub struct TextFormatter {
    width: usize,
}

impl TextFormatter {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINAL_WIDTH)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let hr = "-".repeat(self.width);
        let hr2 = "=".repeat(self.width);
        let left_pad = " ".repeat(self.width.saturating_sub(REPORT_TITLE.len()) / 2);

        let mut output = String::new();
        output.push('\n');
        output.push_str(&left_pad);
        output.push_str(REPORT_TITLE);
        output.push_str("\n\n");
        output.push_str(&hr2);
        output.push_str("\n\n");
        output.push_str(&audit_summary(&model.summary));
        output.push_str("\n\n");
        output.push_str(&hr);
        output.push_str("\n\n");

        let blocks: Vec<String> = model
            .advisories
            .iter()
            .map(|advisory| {
                [
                    advisory_title(advisory),
                    wrap_text(&advisory_summary(advisory), self.width - 2),
                    hr.clone(),
                ]
                .join("\n\n")
            })
            .collect();
        output.push_str(&blocks.join("\n\n"));
        output.push('\n');

        Ok(output)
    }
}

/// Word-wraps every line of `text` to `width` columns
///
/// Lines that already fit are kept verbatim, so aligned `Key:   value`
/// lines survive. Words longer than `width` are never split.
fn wrap_text(text: &str, width: usize) -> String {
    text.lines()
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
