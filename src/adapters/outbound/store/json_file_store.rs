use super::snapshot_cell::SnapshotCell;
use crate::dependency_graph::domain::{AtomicGraph, DependencyEdge, Gav, ResolvedDescriptor};
use crate::dependency_graph::services::GraphBuilder;
use crate::ports::outbound::{GraphStore, IngestSummary};
use crate::shared::error::AnalyzerError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Current on-disk layout
const STORE_FORMAT_VERSION: u32 = 1;

/// On-disk snapshot layout
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    format_version: u32,
    revision: u64,
    /// RFC 3339 timestamp of the last write
    updated_at: String,
    components: Vec<Gav>,
    edges: Vec<DependencyEdge>,
}

impl StoreFile {
    fn from_graph(graph: &AtomicGraph) -> Self {
        Self {
            format_version: STORE_FORMAT_VERSION,
            revision: graph.revision(),
            updated_at: chrono::Utc::now().to_rfc3339(),
            components: graph.components().cloned().collect(),
            edges: graph.edges().cloned().collect(),
        }
    }

    fn into_graph(self) -> AtomicGraph {
        AtomicGraph::from_parts(self.revision, self.components, self.edges)
    }
}

/// JsonFileGraphStore adapter persisting snapshots to a JSON file
///
/// Every changed snapshot is written to a temporary file next to the store
/// and renamed over it, so the file always holds a complete snapshot.
/// A missing file is an empty graph.
pub struct JsonFileGraphStore {
    path: PathBuf,
    cell: SnapshotCell,
}

impl JsonFileGraphStore {
    /// Opens the store, loading the snapshot if the file exists
    ///
    /// # Errors
    /// Returns an error if the path is a symbolic link or the file is not a
    /// valid snapshot
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        reject_symlink(&path, "graph store")?;

        let graph = if path.exists() {
            Self::load(&path)?
        } else {
            tracing::debug!(path = %path.display(), "store file missing; starting empty");
            AtomicGraph::new()
        };

        Ok(Self {
            path,
            cell: SnapshotCell::new(graph),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<AtomicGraph> {
        let read_error = |details: String| AnalyzerError::StoreReadError {
            path: path.to_path_buf(),
            details,
        };

        let content = std::fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
        let file: StoreFile =
            serde_json::from_str(&content).map_err(|e| read_error(e.to_string()))?;
        if file.format_version != STORE_FORMAT_VERSION {
            return Err(read_error(format!(
                "unsupported store format version {}",
                file.format_version
            ))
            .into());
        }

        let graph = file.into_graph();
        tracing::debug!(
            path = %path.display(),
            revision = graph.revision(),
            components = graph.component_count(),
            edges = graph.edge_count(),
            "loaded graph store"
        );
        Ok(graph)
    }

    /// Writes the snapshot through a sibling temporary file and an atomic rename
    fn persist(path: &Path, graph: &AtomicGraph) -> Result<()> {
        let write_error = |details: String| AnalyzerError::StoreWriteError {
            path: path.to_path_buf(),
            details,
        };

        reject_symlink(path, "graph store")?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let json = serde_json::to_string_pretty(&StoreFile::from_graph(graph))
            .map_err(|e| write_error(e.to_string()))?;
        let mut temp =
            tempfile::NamedTempFile::new_in(&directory).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl GraphStore for JsonFileGraphStore {
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
        if !report.changed() {
            return Ok(summary);
        }

        let graph = Arc::new(report.graph);
        let path = self.path.clone();
        let to_write = Arc::clone(&graph);
        tokio::task::spawn_blocking(move || Self::persist(&path, &to_write))
            .await
            .map_err(|e| anyhow::anyhow!("Graph store write task failed: {}", e))??;

        self.cell.publish(graph);
        tracing::info!(
            path = %self.path.display(),
            revision = summary.revision,
            "persisted graph store"
        );
        Ok(summary)
    }
}
