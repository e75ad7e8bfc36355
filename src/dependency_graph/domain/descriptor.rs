use std::collections::BTreeMap;

/// Default scope applied when a dependency declares none
pub const DEFAULT_SCOPE: &str = "compile";

/// Property name -> literal value, as declared in `<properties>`
pub type PropertyTable = BTreeMap<String, String>;

/// Coordinates as written in a document, before any resolution.
///
/// Each field may be absent or contain `${...}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCoordinates {
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub version: Option<String>,
}

impl RawCoordinates {
    pub fn new(group: Option<&str>, artifact: Option<&str>, version: Option<&str>) -> Self {
        Self {
            group: group.map(String::from),
            artifact: artifact.map(String::from),
            version: version.map(String::from),
        }
    }
}

/// The `<parent>` block of a descriptor
pub type ParentReference = RawCoordinates;

/// One `<dependency>` entry as written in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDependency {
    pub group: Option<String>,
    pub artifact: String,
    pub version: Option<String>,
    pub scope: String,
    pub optional: bool,
}

impl RawDependency {
    pub fn new(group: Option<&str>, artifact: &str, version: Option<&str>) -> Self {
        Self {
            group: group.map(String::from),
            artifact: artifact.to_string(),
            version: version.map(String::from),
            scope: DEFAULT_SCOPE.to_string(),
            optional: false,
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_string();
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// A parsed but not yet resolved project descriptor.
///
/// Created once per document and dropped after batch resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDescriptor {
    pub source_label: String,
    pub coordinates: RawCoordinates,
    pub parent: Option<ParentReference>,
    pub properties: PropertyTable,
    pub dependencies: Vec<RawDependency>,
    /// Non-fatal problems found while parsing (e.g. dropped dependency entries)
    pub warnings: Vec<String>,
}

impl RawDescriptor {
    pub fn new(source_label: impl Into<String>, coordinates: RawCoordinates) -> Self {
        Self {
            source_label: source_label.into(),
            coordinates,
            parent: None,
            properties: PropertyTable::new(),
            dependencies: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: ParentReference) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_dependency(mut self, dependency: RawDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Compact label for display before resolution, e.g. `com.acme:app:${revision}`
    pub fn declared_label(&self) -> String {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "?".to_string());
        let group = self
            .coordinates
            .group
            .clone()
            .or_else(|| self.parent.as_ref().and_then(|p| p.group.clone()));
        let version = self
            .coordinates
            .version
            .clone()
            .or_else(|| self.parent.as_ref().and_then(|p| p.version.clone()));
        format!(
            "{}:{}:{}",
            show(&group),
            show(&self.coordinates.artifact),
            show(&version)
        )
    }
}
