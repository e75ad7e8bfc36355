use crate::dependency_graph::domain::{AggregatedGraph, AggregationToggles, AtomicGraph};
use std::sync::Arc;

/// GraphAggregation port producing aggregated views of a snapshot
///
/// Lets adapters memoize views: a snapshot is identified by its revision,
/// so equal (toggles, revision) inputs always give an equal graph.
pub trait GraphAggregation: Send + Sync {
    fn aggregate(&self, graph: &AtomicGraph, toggles: AggregationToggles) -> Arc<AggregatedGraph>;
}
