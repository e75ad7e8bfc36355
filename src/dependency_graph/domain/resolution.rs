use super::Gav;
use std::fmt;

/// A dependency whose coordinates are final
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub gav: Gav,
    pub scope: String,
    pub optional: bool,
}

impl ResolvedDependency {
    /// User-facing label, e.g. `junit:junit:4.13.2 (scope=test) (optional)`
    pub fn label(&self) -> String {
        let mut label = format!("{} (scope={})", self.gav, self.scope);
        if self.optional {
            label.push_str(" (optional)");
        }
        label
    }
}

/// A descriptor after identity resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDescriptor {
    pub source_label: String,
    pub gav: Gav,
    pub parent: Option<Gav>,
    pub dependencies: Vec<ResolvedDependency>,
}

/// Which coordinate a warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    Group,
    Artifact,
    Version,
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateField::Group => write!(f, "groupId"),
            CoordinateField::Artifact => write!(f, "artifactId"),
            CoordinateField::Version => write!(f, "version"),
        }
    }
}

/// What went wrong while resolving; never fatal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A placeholder survived every interpolation pass
    UnresolvedPlaceholder {
        field: CoordinateField,
        expression: String,
        /// `Some(artifact)` when the field belongs to a dependency entry
        dependency: Option<String>,
    },
    /// No value was declared or inherited
    MissingField {
        field: CoordinateField,
        dependency: Option<String>,
    },
    /// The parent chain revisits a descriptor
    ParentCycle { revisited: String },
    /// The parent chain is longer than the hop bound
    ParentChainTooLong { hops: usize },
}

/// Diagnostic emitted by the resolver for one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionWarning {
    pub source_label: String,
    pub kind: WarningKind,
}

impl ResolutionWarning {
    pub fn new(source_label: &str, kind: WarningKind) -> Self {
        Self {
            source_label: source_label.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner = |dependency: &Option<String>| match dependency {
            Some(artifact) => format!("dependency '{}' ", artifact),
            None => String::new(),
        };
        match &self.kind {
            WarningKind::UnresolvedPlaceholder {
                field,
                expression,
                dependency,
            } => write!(
                f,
                "{}: {}{} '{}' could not be resolved; using Unknown",
                self.source_label,
                owner(dependency),
                field,
                expression
            ),
            WarningKind::MissingField { field, dependency } => write!(
                f,
                "{}: {}{} is not declared or inherited; using Unknown",
                self.source_label,
                owner(dependency),
                field
            ),
            WarningKind::ParentCycle { revisited } => write!(
                f,
                "{}: parent chain cycles back to {}; inheritance stopped there",
                self.source_label, revisited
            ),
            WarningKind::ParentChainTooLong { hops } => write!(
                f,
                "{}: parent chain exceeds {} hops; remaining ancestors ignored",
                self.source_label, hops
            ),
        }
    }
}

/// Result of resolving one batch
#[derive(Debug, Clone, Default)]
pub struct ResolutionOutcome {
    pub descriptors: Vec<ResolvedDescriptor>,
    pub warnings: Vec<ResolutionWarning>,
}

/// Read access to previously resolved components.
///
/// Lets a batch inherit from a parent that was ingested earlier.
pub trait ComponentLookup {
    /// Finds a stored component by group and artifact.
    ///
    /// With a version, only an exact match counts. Without one, the stored
    /// component is returned only if exactly one version of it is known.
    fn find_component(&self, group: &str, artifact: &str, version: Option<&str>) -> Option<Gav>;
}

/// Lookup for a resolution that has no prior state
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPriorComponents;

impl ComponentLookup for NoPriorComponents {
    fn find_component(&self, _group: &str, _artifact: &str, _version: Option<&str>) -> Option<Gav> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_label() {
        let dep = ResolvedDependency {
            gav: Gav::new("junit", "junit", "4.13.2"),
            scope: "test".to_string(),
            optional: true,
        };
        assert_eq!(dep.label(), "junit:junit:4.13.2 (scope=test) (optional)");
    }

    #[test]
    fn test_warning_display_mentions_dependency() {
        let warning = ResolutionWarning::new(
            "app/pom.xml",
            WarningKind::UnresolvedPlaceholder {
                field: CoordinateField::Version,
                expression: "${log4j.version}".to_string(),
                dependency: Some("log4j".to_string()),
            },
        );
        assert_eq!(
            warning.to_string(),
            "app/pom.xml: dependency 'log4j' version '${log4j.version}' could not be resolved; using Unknown"
        );
    }

    #[test]
    fn test_warning_display_cycle() {
        let warning = ResolutionWarning::new(
            "a/pom.xml",
            WarningKind::ParentCycle {
                revisited: "b/pom.xml".to_string(),
            },
        );
        assert!(warning.to_string().contains("cycles back to b/pom.xml"));
    }

    #[test]
    fn test_no_prior_components_finds_nothing() {
        assert!(NoPriorComponents
            .find_component("com.acme", "parent", Some("1.0"))
            .is_none());
    }
}
