/// Output format enumeration for the audit report
///
/// Understood by both the CLI (inbound adapter) and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console report (default)
    #[default]
    Text,
    /// JUnit-compatible XML
    Xml,
}

impl OutputFormat {
    /// Maps the `--xml` toggle to a format
    pub fn from_xml_flag(xml: bool) -> Self {
        if xml {
            OutputFormat::Xml
        } else {
            OutputFormat::Text
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Xml => write!(f, "xml"),
        }
    }
}
