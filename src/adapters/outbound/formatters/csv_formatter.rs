use crate::application::read_models::{ComponentView, GraphView, PairView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const PAIRS_HEADER: &str =
    "source_group,source_artifact,source_version,target_group,target_artifact,target_version,scope";
const EDGES_HEADER: &str = "source,target,scope,contributing_edges";
const COMPONENTS_HEADER: &str = "group,artifact,version";

/// CsvFormatter adapter for spreadsheet-friendly exports
///
/// Fields are quoted per RFC 4180 when they contain a comma, a double quote
/// or a line break. Coordinates dropped by aggregation are blank columns.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn write_row<'a>(output: &mut String, fields: impl IntoIterator<Item = &'a str>) {
        let row: Vec<String> = fields.into_iter().map(Self::escape_field).collect();
        output.push_str(&row.join(","));
        output.push_str("\r\n");
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    /// Edge list of the view; node metadata has no tabular counterpart
    fn format_graph(&self, view: &GraphView) -> Result<String> {
        let mut output = format!("{}\r\n", EDGES_HEADER);
        for edge in &view.edges {
            let count = edge.contributing_edges.to_string();
            Self::write_row(
                &mut output,
                [
                    edge.source.as_str(),
                    edge.target.as_str(),
                    edge.scope.as_str(),
                    count.as_str(),
                ],
            );
        }
        Ok(output)
    }

    fn format_pairs(&self, rows: &[PairView]) -> Result<String> {
        let mut output = format!("{}\r\n", PAIRS_HEADER);
        for row in rows {
            Self::write_row(
                &mut output,
                [
                    row.source_group.as_deref().unwrap_or(""),
                    row.source_artifact.as_str(),
                    row.source_version.as_deref().unwrap_or(""),
                    row.target_group.as_deref().unwrap_or(""),
                    row.target_artifact.as_str(),
                    row.target_version.as_deref().unwrap_or(""),
                    row.scope.as_str(),
                ],
            );
        }
        Ok(output)
    }

    fn format_components(&self, components: &[ComponentView]) -> Result<String> {
        let mut output = format!("{}\r\n", COMPONENTS_HEADER);
        for component in components {
            Self::write_row(
                &mut output,
                [
                    component.group.as_str(),
                    component.artifact.as_str(),
                    component.version.as_str(),
                ],
            );
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(scope: &str) -> PairView {
        PairView {
            source_group: Some("com.acme".to_string()),
            source_artifact: "app".to_string(),
            source_version: None,
            target_group: Some("log4j".to_string()),
            target_artifact: "log4j".to_string(),
            target_version: None,
            scope: scope.to_string(),
        }
    }

    #[test]
    fn test_pairs_header_and_blank_columns() {
        let output = CsvFormatter::new().format_pairs(&[pair("test")]).unwrap();
        let lines: Vec<&str> = output.split("\r\n").collect();

        assert_eq!(lines[0], PAIRS_HEADER);
        assert_eq!(lines[1], "com.acme,app,,log4j,log4j,,test");
    }

    #[test]
    fn test_multi_scope_is_quoted() {
        let output = CsvFormatter::new()
            .format_pairs(&[pair("compile, test")])
            .unwrap();
        assert!(output.contains(",\"compile, test\"\r\n"));
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(CsvFormatter::escape_field("plain"), "plain");
        assert_eq!(CsvFormatter::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(CsvFormatter::escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_components_listing() {
        let components = vec![ComponentView {
            id: "junit:junit:4.13.2".to_string(),
            group: "junit".to_string(),
            artifact: "junit".to_string(),
            version: "4.13.2".to_string(),
        }];
        let output = CsvFormatter::new().format_components(&components).unwrap();
        assert_eq!(output, "group,artifact,version\r\njunit,junit,4.13.2\r\n");
    }
}
