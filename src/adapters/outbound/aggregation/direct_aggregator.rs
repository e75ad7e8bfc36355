use crate::dependency_graph::domain::{AggregatedGraph, AggregationToggles, AtomicGraph};
use crate::dependency_graph::services::GraphAggregator;
use crate::ports::outbound::GraphAggregation;
use std::sync::Arc;

/// DirectAggregator adapter computing every view from scratch
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAggregator;

impl GraphAggregation for DirectAggregator {
    fn aggregate(&self, graph: &AtomicGraph, toggles: AggregationToggles) -> Arc<AggregatedGraph> {
        Arc::new(GraphAggregator::aggregate(graph, toggles))
    }
}
