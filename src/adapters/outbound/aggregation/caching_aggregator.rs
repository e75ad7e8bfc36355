use super::DirectAggregator;
use crate::dependency_graph::domain::{AggregatedGraph, AggregationToggles, AtomicGraph};
use crate::ports::outbound::GraphAggregation;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for aggregated views
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
struct CacheKey {
    toggles: AggregationToggles,
    revision: u64,
}

/// CachingAggregator wraps a GraphAggregation and memoizes its views.
///
/// Views are keyed on (toggles, snapshot revision). When a newer revision
/// shows up, views of older revisions are evicted, so the cache never holds
/// more than one view per toggle combination.
pub struct CachingAggregator<A: GraphAggregation = DirectAggregator> {
    inner: A,
    cache: Arc<DashMap<CacheKey, Arc<AggregatedGraph>>>,
}

impl CachingAggregator<DirectAggregator> {
    pub fn direct() -> Self {
        Self::new(DirectAggregator)
    }
}

impl<A: GraphAggregation> CachingAggregator<A> {
    /// Creates a new caching aggregator wrapping the given inner aggregator
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<A: GraphAggregation> GraphAggregation for CachingAggregator<A> {
    fn aggregate(&self, graph: &AtomicGraph, toggles: AggregationToggles) -> Arc<AggregatedGraph> {
        let key = CacheKey {
            toggles,
            revision: graph.revision(),
        };

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(revision = key.revision, "aggregated view cache hit");
            return Arc::clone(cached.value());
        }

        let aggregated = self.inner.aggregate(graph, toggles);
        self.cache.retain(|k, _| k.revision >= key.revision);
        self.cache.insert(key, Arc::clone(&aggregated));
        aggregated
    }
}
