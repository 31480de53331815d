use crate::application::read_models::AuditReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering an audit read model
///
/// Implemented once per output format (console text, JUnit XML).
pub trait ReportFormatter {
    /// Renders the read model into the final report text
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, model: &AuditReadModel) -> Result<String>;
}
