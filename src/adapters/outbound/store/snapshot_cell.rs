use crate::dependency_graph::domain::AtomicGraph;
use std::sync::{Arc, RwLock};
use tokio::sync::{Mutex, MutexGuard};

/// Holds the current graph snapshot and serializes writers.
///
/// Readers clone the `Arc` and never block on a running ingestion; the
/// write gate makes read-build-publish a single critical section.
pub(crate) struct SnapshotCell {
    current: RwLock<Arc<AtomicGraph>>,
    write_gate: Mutex<()>,
}

impl SnapshotCell {
    pub(crate) fn new(graph: AtomicGraph) -> Self {
        Self {
            current: RwLock::new(Arc::new(graph)),
            write_gate: Mutex::new(()),
        }
    }

    pub(crate) fn load(&self) -> Arc<AtomicGraph> {
        // a poisoned lock still holds a complete snapshot
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub(crate) fn publish(&self, graph: Arc<AtomicGraph>) {
        match self.current.write() {
            Ok(mut guard) => *guard = graph,
            Err(poisoned) => *poisoned.into_inner() = graph,
        }
    }

    /// Waits for exclusive write access
    pub(crate) async fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }
}
