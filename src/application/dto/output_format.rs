/// Output format enumeration for query reports
///
/// Shared by the CLI (inbound adapter), the configuration file and the
/// formatters (outbound adapters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Cytoscape-style JSON (default)
    #[default]
    Json,
    /// Human-readable Markdown tables
    Markdown,
    /// Comma-separated values, one row per dependency pair
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'markdown' or 'csv'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Md").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("xml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xml"));
        assert!(error.contains("csv"));
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Csv] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
