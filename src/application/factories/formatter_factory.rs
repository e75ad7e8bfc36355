use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, MarkdownFormatter};
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
    /// # Examples
    /// ```
    /// use jdep_analyzer::application::dto::OutputFormat;
    /// use jdep_analyzer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv);
    /// let output = formatter.format_components(&[]).unwrap();
    /// assert_eq!(output, "group,artifact,version\r\n");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use jdep_analyzer::application::dto::OutputFormat;
    /// use jdep_analyzer::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON (Cytoscape elements) output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON (Cytoscape elements) output...",
            OutputFormat::Markdown => "📝 Generating Markdown format output...",
            OutputFormat::Csv => "📝 Generating CSV format output...",
        }
    }
}
