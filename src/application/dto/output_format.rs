/// Output format for the classification report
///
/// This enum belongs in the application layer because the CLI, the config
/// file and the formatter factory all need to agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width text table followed by the interactive session (default)
    #[default]
    Text,
    /// Machine-readable JSON report, never interactive
    Json,
}

impl OutputFormat {
    /// Whether this format allows the interactive uninstall session
    pub fn is_interactive(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
