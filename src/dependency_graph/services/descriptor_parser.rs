use crate::dependency_graph::domain::{
    PropertyTable, RawCoordinates, RawDependency, RawDescriptor, DEFAULT_SCOPE,
};
use crate::shared::error::ParsingError;
use roxmltree::{Document, Node};

/// Maximum accepted document size (100 MB)
pub const MAX_DOCUMENT_SIZE: usize = 100 * 1024 * 1024;

/// Root element names accepted as a project descriptor
const ROOT_ELEMENTS: [&str; 2] = ["project", "module"];

/// DescriptorParser service turning one POM document into a [`RawDescriptor`]
///
/// Element lookup compares local names only, so a document declaring the
/// default Maven namespace parses exactly like one without it. Placeholders
/// are kept verbatim; resolving them is the resolver's job.
pub struct DescriptorParser;

impl DescriptorParser {
    /// Parses a raw document
    ///
    /// # Arguments
    /// * `bytes` - Raw document content
    /// * `source_label` - Human-readable origin used to attribute errors and warnings
    ///
    /// # Errors
    /// Returns a [`ParsingError`] when the document is too large, not UTF-8,
    /// not well-formed XML, or has no `<project>` root. Dependency entries
    /// without an `artifactId` are dropped with a warning instead.
    pub fn parse(bytes: &[u8], source_label: &str) -> Result<RawDescriptor, ParsingError> {
        if bytes.len() > MAX_DOCUMENT_SIZE {
            return Err(ParsingError::TooLarge {
                source_label: source_label.to_string(),
                size: bytes.len(),
                max: MAX_DOCUMENT_SIZE,
            });
        }

        let text = std::str::from_utf8(bytes).map_err(|_| ParsingError::InvalidEncoding {
            source_label: source_label.to_string(),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        // roxmltree rejects DTDs by default, so no entity expansion can happen
        let document = Document::parse(text).map_err(|e| ParsingError::Malformed {
            source_label: source_label.to_string(),
            details: e.to_string(),
        })?;

        let root = document.root_element();
        let root_name = root.tag_name().name();
        if !ROOT_ELEMENTS.contains(&root_name) {
            return Err(ParsingError::MissingProjectRoot {
                source_label: source_label.to_string(),
                found: root_name.to_string(),
            });
        }

        let mut descriptor = RawDescriptor::new(source_label, read_coordinates(root));
        descriptor.parent = child(root, "parent").map(read_coordinates);
        descriptor.properties = child(root, "properties")
            .map(read_properties)
            .unwrap_or_default();

        if let Some(dependencies) = child(root, "dependencies") {
            for (index, node) in children(dependencies, "dependency").enumerate() {
                match read_dependency(node) {
                    Some(dependency) => descriptor.dependencies.push(dependency),
                    None => descriptor.warnings.push(format!(
                        "{}: dependency #{} (groupId {}) has no artifactId and was dropped",
                        source_label,
                        index + 1,
                        text_of(node, "groupId").unwrap_or_else(|| "?".to_string())
                    )),
                }
            }
        }

        tracing::debug!(
            source = source_label,
            dependencies = descriptor.dependencies.len(),
            properties = descriptor.properties.len(),
            "parsed descriptor"
        );

        Ok(descriptor)
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Trimmed text content of an element; empty text counts as absent
fn element_text(node: Node) -> Option<String> {
    let text: String = node
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn text_of(node: Node, name: &str) -> Option<String> {
    child(node, name).and_then(element_text)
}

fn read_coordinates(node: Node) -> RawCoordinates {
    RawCoordinates {
        group: text_of(node, "groupId"),
        artifact: text_of(node, "artifactId"),
        version: text_of(node, "version"),
    }
}

fn read_properties(node: Node) -> PropertyTable {
    node.children()
        .filter(|n| n.is_element())
        .map(|n| {
            (
                n.tag_name().name().to_string(),
                element_text(n).unwrap_or_default(),
            )
        })
        .collect()
}

fn read_dependency(node: Node) -> Option<RawDependency> {
    let artifact = text_of(node, "artifactId")?;
    Some(RawDependency {
        group: text_of(node, "groupId"),
        artifact,
        version: text_of(node, "version"),
        scope: text_of(node, "scope").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
        optional: text_of(node, "optional")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false),
    })
}
