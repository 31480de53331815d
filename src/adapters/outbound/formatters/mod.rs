/// Formatter adapters for the supported report formats
mod junit_formatter;
mod templates;
mod text_formatter;

pub use junit_formatter::JunitFormatter;
pub use text_formatter::TextFormatter;
