use crate::application::read_models::{ComponentView, GraphView, GraphViewMeta, PairView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Cytoscape-style document: `{ "elements": {...}, "meta": {...} }`
#[derive(Debug, Serialize)]
struct CytoscapeDocument<'a> {
    elements: Elements<'a>,
    meta: &'a GraphViewMeta,
}

#[derive(Debug, Serialize)]
struct Elements<'a> {
    nodes: Vec<Element<NodeData<'a>>>,
    edges: Vec<Element<EdgeData<'a>>>,
}

#[derive(Debug, Serialize)]
struct Element<T> {
    data: T,
    #[serde(skip_serializing_if = "String::is_empty")]
    classes: String,
}

#[derive(Debug, Serialize)]
struct NodeData<'a> {
    id: &'a str,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    artifact: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    merged_count: usize,
}

#[derive(Debug, Serialize)]
struct EdgeData<'a> {
    id: &'a str,
    source: &'a str,
    target: &'a str,
    scope: &'a str,
    contributing_edges: usize,
}

/// JsonFormatter adapter producing graph documents for Cytoscape-like viewers
///
/// Graph views become an `elements` object with node and edge entries whose
/// `classes` string drives styling (`root`, `highlight`, `aggregated`).
/// Pair rows and component listings are plain JSON arrays.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_graph(&self, view: &GraphView) -> Result<String> {
        let nodes = view
            .nodes
            .iter()
            .map(|node| Element {
                data: NodeData {
                    id: &node.id,
                    label: &node.label,
                    group: node.group.as_deref(),
                    artifact: &node.artifact,
                    version: node.version.as_deref(),
                    merged_count: node.merged_count,
                },
                classes: node.classes.join(" "),
            })
            .collect();

        let edges = view
            .edges
            .iter()
            .map(|edge| Element {
                data: EdgeData {
                    id: &edge.id,
                    source: &edge.source,
                    target: &edge.target,
                    scope: &edge.scope,
                    contributing_edges: edge.contributing_edges,
                },
                classes: String::new(),
            })
            .collect();

        let document = CytoscapeDocument {
            elements: Elements { nodes, edges },
            meta: &view.meta,
        };
        serde_json::to_string_pretty(&document).map_err(Into::into)
    }

    fn format_pairs(&self, rows: &[PairView]) -> Result<String> {
        serde_json::to_string_pretty(rows).map_err(Into::into)
    }

    fn format_components(&self, components: &[ComponentView]) -> Result<String> {
        serde_json::to_string_pretty(components).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{EdgeView, NodeView};

    fn sample_view() -> GraphView {
        GraphView {
            meta: GraphViewMeta {
                revision: 2,
                keep_group: true,
                keep_version: false,
                direction: "reverse".to_string(),
                depth: "all".to_string(),
                root: Some("log4j:log4j".to_string()),
                root_missing: false,
                node_count: 2,
                edge_count: 1,
            },
            nodes: vec![
                NodeView {
                    id: "com.acme:app".to_string(),
                    label: "app".to_string(),
                    group: Some("com.acme".to_string()),
                    artifact: "app".to_string(),
                    version: None,
                    merged_count: 1,
                    classes: vec!["highlight".to_string(), "aggregated".to_string()],
                },
                NodeView {
                    id: "log4j:log4j".to_string(),
                    label: "log4j".to_string(),
                    group: Some("log4j".to_string()),
                    artifact: "log4j".to_string(),
                    version: None,
                    merged_count: 2,
                    classes: vec!["root".to_string(), "aggregated".to_string()],
                },
            ],
            edges: vec![EdgeView {
                id: "com.acme:app__log4j:log4j".to_string(),
                source: "com.acme:app".to_string(),
                target: "log4j:log4j".to_string(),
                scope: "compile, test".to_string(),
                contributing_edges: 2,
            }],
        }
    }

    #[test]
    fn test_graph_has_cytoscape_elements() {
        let output = JsonFormatter::new().format_graph(&sample_view()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        let nodes = json["elements"]["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1]["data"]["id"], "log4j:log4j");
        assert_eq!(nodes[1]["data"]["merged_count"], 2);
        assert_eq!(nodes[1]["classes"], "root aggregated");
        assert!(nodes[1]["data"].get("version").is_none());

        let edges = json["elements"]["edges"].as_array().unwrap();
        assert_eq!(edges[0]["data"]["id"], "com.acme:app__log4j:log4j");
        assert_eq!(edges[0]["data"]["scope"], "compile, test");
        assert!(edges[0].get("classes").is_none());

        assert_eq!(json["meta"]["revision"], 2);
        assert_eq!(json["meta"]["root"], "log4j:log4j");
    }

    #[test]
    fn test_pairs_as_array() {
        let rows = vec![PairView {
            source_group: Some("com.acme".to_string()),
            source_artifact: "app".to_string(),
            source_version: None,
            target_group: Some("log4j".to_string()),
            target_artifact: "log4j".to_string(),
            target_version: None,
            scope: "compile".to_string(),
        }];

        let output = JsonFormatter::new().format_pairs(&rows).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["target_artifact"], "log4j");
        assert!(json[0]["source_version"].is_null());
    }

    #[test]
    fn test_empty_components() {
        let output = JsonFormatter::new().format_components(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
