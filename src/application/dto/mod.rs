/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod ingest_request;
mod ingest_response;
mod output_format;
mod query_request;

pub use ingest_request::IngestRequest;
pub use ingest_response::{DocumentReport, DocumentStatus, IngestResponse};
pub use output_format::OutputFormat;
pub use query_request::{GraphViewRequest, ListingRequest};
