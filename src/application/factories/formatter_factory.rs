use crate::adapters::outbound::formatters::{JunitFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `width` - Console width; only used by the text formatter
    ///
    /// # Examples
    /// ```
    /// use npm_audit_report::application::dto::OutputFormat;
    /// use npm_audit_report::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Xml, 80);
    /// ```
    pub fn create(format: OutputFormat, width: usize) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(width)),
            OutputFormat::Xml => Box::new(JunitFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_audit_report::application::dto::OutputFormat;
    /// use npm_audit_report::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Xml);
    /// assert_eq!(message, "📝 Generating JUnit XML report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating console report...",
            OutputFormat::Xml => "📝 Generating JUnit XML report...",
        }
    }
}
