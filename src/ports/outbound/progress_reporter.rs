/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing feedback (e.g., to stderr) during
/// ingestion and queries. Diagnostics for developers go through `tracing`.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress with a percentage
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning, e.g. a document that failed to parse or an
    /// unresolved placeholder
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
