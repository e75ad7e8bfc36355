use crate::dependency_graph::domain::{RawDependency, RawDescriptor, UNKNOWN};

/// Text tree of one descriptor and its direct dependencies, as declared
pub struct DescriptorTree;

impl DescriptorTree {
    pub fn render(descriptor: &RawDescriptor) -> String {
        let mut out = format!("{}\n", descriptor.declared_label());

        if descriptor.dependencies.is_empty() {
            out.push_str("└── No direct dependencies found\n");
            return out;
        }

        out.push_str("└── dependencies\n");
        let last = descriptor.dependencies.len() - 1;
        for (i, dependency) in descriptor.dependencies.iter().enumerate() {
            let branch = if i == last { "└──" } else { "├──" };
            out.push_str(&format!("    {} {}\n", branch, Self::label(dependency)));
        }
        out
    }

    /// e.g. `junit:junit:4.13.2 (scope=test) (optional)`
    fn label(dependency: &RawDependency) -> String {
        let mut label = format!(
            "{}:{}:{} (scope={})",
            dependency.group.as_deref().unwrap_or(UNKNOWN),
            dependency.artifact,
            dependency.version.as_deref().unwrap_or(UNKNOWN),
            dependency.scope
        );
        if dependency.optional {
            label.push_str(" (optional)");
        }
        label
    }
}
