/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, storage, console, etc.).
pub mod descriptor_source;
pub mod formatter;
pub mod graph_aggregation;
pub mod graph_store;
pub mod output_presenter;
pub mod progress_reporter;

pub use descriptor_source::{DescriptorSource, SourceDocument};
pub use formatter::ReportFormatter;
pub use graph_aggregation::GraphAggregation;
pub use graph_store::{GraphStore, IngestSummary};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
