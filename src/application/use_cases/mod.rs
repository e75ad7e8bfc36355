/// Use cases module containing application business logic orchestration
mod ingest_descriptors;
mod inspect_descriptor;
mod query_graph;

pub use ingest_descriptors::IngestDescriptorsUseCase;
pub use inspect_descriptor::{InspectDescriptorUseCase, InspectedDescriptor};
pub use query_graph::QueryGraphUseCase;
