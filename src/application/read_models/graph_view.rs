//! Graph view structs for read model
//!
//! A presentation-ready aggregated graph: string ids, display labels and
//! style classes, independent of any output format.

use serde::Serialize;

/// View of one aggregated node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    /// Aggregation key display form, e.g. `log4j:log4j` when versions are dropped
    pub id: String,
    pub label: String,
    pub group: Option<String>,
    pub artifact: String,
    pub version: Option<String>,
    /// Number of atomic components merged into this node
    pub merged_count: usize,
    /// Style classes: `root`, `highlight`, `aggregated`
    pub classes: Vec<String>,
}

impl NodeView {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// View of one aggregated edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    /// `source__target`
    pub id: String,
    pub source: String,
    pub target: String,
    /// Scopes joined with `", "`, sorted
    pub scope: String,
    pub contributing_edges: usize,
}

/// Parameters the view was computed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphViewMeta {
    pub revision: u64,
    pub keep_group: bool,
    pub keep_version: bool,
    pub direction: String,
    pub depth: String,
    pub root: Option<String>,
    /// Root was requested but is not part of the graph
    pub root_missing: bool,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Presentation-ready aggregated graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphView {
    pub meta: GraphViewMeta,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}
