use super::snapshot_cell::SnapshotCell;
use crate::dependency_graph::domain::{AtomicGraph, ResolvedDescriptor};
use crate::dependency_graph::services::GraphBuilder;
use crate::ports::outbound::{GraphStore, IngestSummary};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// InMemoryGraphStore adapter keeping the graph for the lifetime of the process
pub struct InMemoryGraphStore {
    cell: SnapshotCell,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::with_graph(AtomicGraph::new())
    }

    /// Starts from an existing graph
    pub fn with_graph(graph: AtomicGraph) -> Self {
        Self {
            cell: SnapshotCell::new(graph),
        }
    }
}

impl Default for InMemoryGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn snapshot(&self) -> Result<Arc<AtomicGraph>> {
        Ok(self.cell.load())
    }

    async fn ingest(&self, resolved: &[ResolvedDescriptor]) -> Result<IngestSummary> {
        let _writer = self.cell.lock_writer().await;
        let current = self.cell.load();

        let report = GraphBuilder::build(AtomicGraph::clone(&current), resolved);
        let summary = IngestSummary {
            revision: report.graph.revision(),
            added_components: report.added_components,
            added_edges: report.added_edges,
        };
        if report.changed() {
            self.cell.publish(Arc::new(report.graph));
        }
        Ok(summary)
    }
}
