//! Builder for constructing read models from domain objects

use super::component_view::{ComponentView, PairView};
use super::graph_view::{EdgeView, GraphView, GraphViewMeta, NodeView};
use crate::dependency_graph::domain::{AggregatedGraph, AggregationKey, Depth, Direction, Gav};
use crate::dependency_graph::services::PairRow;
use std::collections::BTreeSet;

pub const ROOT_CLASS: &str = "root";
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const AGGREGATED_CLASS: &str = "aggregated";

/// How a graph view was selected
#[derive(Debug, Clone)]
pub struct ViewContext<'a> {
    pub revision: u64,
    pub direction: Direction,
    pub depth: Depth,
    pub root: Option<&'a AggregationKey>,
    pub root_missing: bool,
    /// Keys marked with the `highlight` class
    pub highlight: &'a BTreeSet<AggregationKey>,
}

/// Transforms domain graphs and rows into view structs
pub struct ViewBuilder;

impl ViewBuilder {
    pub fn graph_view(graph: &AggregatedGraph, context: &ViewContext<'_>) -> GraphView {
        let toggles = graph.toggles();

        let nodes = graph
            .nodes()
            .map(|node| {
                let id = node.key.to_string();
                let mut classes = Vec::new();
                if context.root == Some(&node.key) {
                    classes.push(ROOT_CLASS.to_string());
                }
                if context.highlight.contains(&node.key) {
                    classes.push(HIGHLIGHT_CLASS.to_string());
                }
                if !toggles.keep_version {
                    classes.push(AGGREGATED_CLASS.to_string());
                }
                NodeView {
                    label: if toggles.keep_version {
                        id.clone()
                    } else {
                        node.key.artifact().to_string()
                    },
                    id,
                    group: node.key.group().map(String::from),
                    artifact: node.key.artifact().to_string(),
                    version: node.key.version().map(String::from),
                    merged_count: node.merged_count(),
                    classes,
                }
            })
            .collect();

        let edges = graph
            .edges()
            .map(|edge| {
                let source = edge.source.to_string();
                let target = edge.target.to_string();
                EdgeView {
                    id: format!("{}__{}", source, target),
                    source,
                    target,
                    scope: edge.scope_label(),
                    contributing_edges: edge.contributing_edges,
                }
            })
            .collect();

        GraphView {
            meta: GraphViewMeta {
                revision: context.revision,
                keep_group: toggles.keep_group,
                keep_version: toggles.keep_version,
                direction: context.direction.to_string(),
                depth: context.depth.to_string(),
                root: context.root.map(|k| k.to_string()),
                root_missing: context.root_missing,
                node_count: graph.node_count(),
                edge_count: graph.edge_count(),
            },
            nodes,
            edges,
        }
    }

    pub fn pair_views(rows: &[PairRow]) -> Vec<PairView> {
        rows.iter()
            .map(|row| PairView {
                source_group: row.source.group().map(String::from),
                source_artifact: row.source.artifact().to_string(),
                source_version: row.source.version().map(String::from),
                target_group: row.target.group().map(String::from),
                target_artifact: row.target.artifact().to_string(),
                target_version: row.target.version().map(String::from),
                scope: row.scopes.iter().cloned().collect::<Vec<_>>().join(", "),
            })
            .collect()
    }

    pub fn component_views<'a>(gavs: impl IntoIterator<Item = &'a Gav>) -> Vec<ComponentView> {
        gavs.into_iter().map(ComponentView::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::{AggregationToggles, AtomicGraph, DependencyEdge};
    use crate::dependency_graph::services::{GraphAggregator, GraphQuery};

    fn graph() -> AtomicGraph {
        let app = Gav::new("com.acme", "app", "1.0");
        let lib = Gav::new("com.acme", "lib", "1.0");
        let log4j = Gav::new("log4j", "log4j", "1.2");
        let mut graph = AtomicGraph::new();
        graph.add_edge(DependencyEdge::new(app.clone(), lib.clone(), "compile", false));
        graph.add_edge(DependencyEdge::new(lib, log4j.clone(), "test", false));
        graph.add_edge(DependencyEdge::new(app, log4j, "compile", false));
        graph
    }

    #[test]
    fn test_graph_view_classes_and_ids() {
        let aggregated = GraphAggregator::aggregate(&graph(), AggregationToggles::new(true, false));
        let root = AggregationKey::GroupArtifact {
            group: "log4j".to_string(),
            artifact: "log4j".to_string(),
        };
        let highlight = GraphQuery::ancestors(&aggregated, &root);
        let context = ViewContext {
            revision: 3,
            direction: Direction::Reverse,
            depth: Depth::Unbounded,
            root: Some(&root),
            root_missing: false,
            highlight: &highlight,
        };

        let view = ViewBuilder::graph_view(&aggregated, &context);

        let log4j = view.nodes.iter().find(|n| n.id == "log4j:log4j").unwrap();
        assert_eq!(log4j.label, "log4j");
        assert!(log4j.has_class(ROOT_CLASS));
        assert!(log4j.has_class(AGGREGATED_CLASS));
        assert!(!log4j.has_class(HIGHLIGHT_CLASS));

        let app = view.nodes.iter().find(|n| n.id == "com.acme:app").unwrap();
        assert!(app.has_class(HIGHLIGHT_CLASS));
        assert_eq!(app.version, None);

        assert!(view
            .edges
            .iter()
            .any(|e| e.id == "com.acme:lib__log4j:log4j" && e.scope == "test"));
        assert_eq!(view.meta.direction, "reverse");
        assert_eq!(view.meta.depth, "all");
        assert_eq!(view.meta.root.as_deref(), Some("log4j:log4j"));
    }

    #[test]
    fn test_pair_views_blank_ignored_columns() {
        let rows = GraphQuery::pair_rows(&graph(), "log4j", true, true);
        let views = ViewBuilder::pair_views(&rows);

        assert_eq!(views.len(), 2);
        for view in &views {
            assert!(view.source_group.is_none());
            assert!(view.target_version.is_none());
            assert_eq!(view.target_artifact, "log4j");
        }
    }
}
