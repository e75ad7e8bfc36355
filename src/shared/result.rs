/// Result alias used by every fallible layer of the analyzer.
///
/// Infrastructure errors are `AnalyzerError` values boxed into `anyhow::Error`
/// so callers can attach context with `?` and `.context(..)`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
