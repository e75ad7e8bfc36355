use crate::application::read_models::{ComponentView, GraphView, PairView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for dependency pairs
const PAIRS_TABLE_HEADER: &str = "| Source | Target | Scope |\n";

/// Markdown table separator line for dependency pairs
const PAIRS_TABLE_SEPARATOR: &str = "|--------|--------|-------|\n";

/// Markdown table header for graph nodes
const NODES_TABLE_HEADER: &str = "| Component | Merged | Classes |\n";

/// Markdown table separator line for graph nodes
const NODES_TABLE_SEPARATOR: &str = "|-----------|--------|---------|\n";

/// Markdown table header for component listings
const COMPONENTS_TABLE_HEADER: &str = "| Group | Artifact | Version |\n";

/// Markdown table separator line for component listings
const COMPONENTS_TABLE_SEPARATOR: &str = "|-------|----------|---------|\n";

/// MarkdownFormatter adapter for human-readable dependency reports
///
/// This adapter implements the ReportFormatter port for Markdown format.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// `group:artifact:version` with dropped coordinates left out
    fn coordinates(group: Option<&str>, artifact: &str, version: Option<&str>) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(group) = group {
            parts.push(group);
        }
        parts.push(artifact);
        if let Some(version) = version {
            parts.push(version);
        }
        Self::escape_markdown_table_cell(&parts.join(":"))
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_graph_summary(&self, output: &mut String, view: &GraphView) {
        let meta = &view.meta;
        output.push_str("# Dependency Graph\n\n");
        output.push_str(&format!("- **Revision**: {}\n", meta.revision));
        output.push_str(&format!(
            "- **Aggregation**: group {}, version {}\n",
            if meta.keep_group { "kept" } else { "dropped" },
            if meta.keep_version { "kept" } else { "dropped" }
        ));
        match &meta.root {
            Some(root) if meta.root_missing => {
                output.push_str(&format!(
                    "- **Root**: `{}` (not found, showing the full graph)\n",
                    root
                ));
            }
            Some(root) => {
                output.push_str(&format!(
                    "- **Root**: `{}` ({}, depth {})\n",
                    root, meta.direction, meta.depth
                ));
            }
            None => {}
        }
        output.push_str(&format!(
            "- **Size**: {} node(s), {} edge(s)\n\n",
            meta.node_count, meta.edge_count
        ));
    }

    fn render_nodes(&self, output: &mut String, view: &GraphView) {
        output.push_str("## Components\n\n");
        output.push_str(NODES_TABLE_HEADER);
        output.push_str(NODES_TABLE_SEPARATOR);
        for node in &view.nodes {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&node.id),
                node.merged_count,
                node.classes.join(", ")
            ));
        }
        output.push('\n');
    }

    fn render_edges(&self, output: &mut String, view: &GraphView) {
        output.push_str("## Dependencies\n\n");
        if view.edges.is_empty() {
            output.push_str("*No dependencies.*\n");
            return;
        }
        output.push_str(PAIRS_TABLE_HEADER);
        output.push_str(PAIRS_TABLE_SEPARATOR);
        for edge in &view.edges {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&edge.source),
                Self::escape_markdown_table_cell(&edge.target),
                Self::escape_markdown_table_cell(&edge.scope)
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_graph(&self, view: &GraphView) -> Result<String> {
        let mut output = String::new();
        self.render_graph_summary(&mut output, view);
        self.render_nodes(&mut output, view);
        self.render_edges(&mut output, view);
        Ok(output)
    }

    fn format_pairs(&self, rows: &[PairView]) -> Result<String> {
        let mut output = String::from("# Dependency Pairs\n\n");
        if rows.is_empty() {
            output.push_str("*No matching dependency pairs.*\n");
            return Ok(output);
        }
        output.push_str(PAIRS_TABLE_HEADER);
        output.push_str(PAIRS_TABLE_SEPARATOR);
        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::coordinates(
                    row.source_group.as_deref(),
                    &row.source_artifact,
                    row.source_version.as_deref()
                ),
                Self::coordinates(
                    row.target_group.as_deref(),
                    &row.target_artifact,
                    row.target_version.as_deref()
                ),
                Self::escape_markdown_table_cell(&row.scope)
            ));
        }
        Ok(output)
    }

    fn format_components(&self, components: &[ComponentView]) -> Result<String> {
        let mut output = String::from("# Components\n\n");
        if components.is_empty() {
            output.push_str("*No matching components.*\n");
            return Ok(output);
        }
        output.push_str(COMPONENTS_TABLE_HEADER);
        output.push_str(COMPONENTS_TABLE_SEPARATOR);
        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&component.group),
                Self::escape_markdown_table_cell(&component.artifact),
                Self::escape_markdown_table_cell(&component.version)
            ));
        }
        Ok(output)
    }
}
