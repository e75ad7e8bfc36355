use crate::dependency_graph::domain::{AtomicGraph, ResolvedDescriptor};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// What a store ingestion changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestSummary {
    /// Revision of the snapshot published by the ingestion
    pub revision: u64,
    pub added_components: usize,
    pub added_edges: usize,
}

/// GraphStore port holding the accumulated atomic graph
///
/// Readers get immutable snapshots; an ingestion builds the next graph from
/// the current one and publishes it atomically.
///
/// # Async Support
/// Implementations must be `Send + Sync` so one store handle can serve
/// concurrent ingestions and queries. Concurrent ingestions never interleave
/// their read-build-publish steps.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Returns the current snapshot
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be loaded
    async fn snapshot(&self) -> Result<Arc<AtomicGraph>>;

    /// Folds resolved descriptors into the stored graph
    ///
    /// Re-ingesting descriptors that are already stored changes nothing,
    /// including the revision.
    ///
    /// # Errors
    /// Returns an error if the new snapshot cannot be persisted; the
    /// previous snapshot then stays current
    async fn ingest(&self, resolved: &[ResolvedDescriptor]) -> Result<IngestSummary>;
}
