use crate::application::read_models::{ComponentView, GraphView, PairView};
use crate::shared::Result;

/// ReportFormatter port for rendering query results
///
/// This port abstracts the output format (JSON, Markdown, CSV) of graph
/// views, pair listings and component listings. A formatter that has no
/// sensible rendering for a view returns a validation error.
pub trait ReportFormatter {
    /// Renders an aggregated graph view (nodes, edges and their metadata)
    fn format_graph(&self, view: &GraphView) -> Result<String>;

    /// Renders deduplicated dependency pairs
    fn format_pairs(&self, rows: &[PairView]) -> Result<String>;

    /// Renders a component listing
    fn format_components(&self, components: &[ComponentView]) -> Result<String>;
}
