use super::{ComponentLookup, Gav};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A "depends on" relationship between two components.
///
/// The full 4-tuple is the identity: the same pair with a different scope
/// or optional flag is a distinct parallel edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub source: Gav,
    pub target: Gav,
    pub scope: String,
    pub optional: bool,
}

impl DependencyEdge {
    pub fn new(source: Gav, target: Gav, scope: impl Into<String>, optional: bool) -> Self {
        Self {
            source,
            target,
            scope: scope.into(),
            optional,
        }
    }
}

/// The dependency graph at full GAV granularity.
///
/// Append-only: components and edges are only ever added, and every edge
/// endpoint is always present as a component. `revision` increases whenever
/// an ingestion adds something, so it can key caches of derived views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomicGraph {
    revision: u64,
    components: BTreeSet<Gav>,
    edges: BTreeSet<DependencyEdge>,
}

impl AtomicGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a graph from stored parts, re-adding any edge endpoint the
    /// component list is missing.
    pub fn from_parts(
        revision: u64,
        components: impl IntoIterator<Item = Gav>,
        edges: impl IntoIterator<Item = DependencyEdge>,
    ) -> Self {
        let mut graph = Self {
            revision,
            components: components.into_iter().collect(),
            edges: BTreeSet::new(),
        };
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn components(&self) -> impl Iterator<Item = &Gav> {
        self.components.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.iter()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn contains_component(&self, gav: &Gav) -> bool {
        self.components.contains(gav)
    }

    pub fn contains_edge(&self, edge: &DependencyEdge) -> bool {
        self.edges.contains(edge)
    }

    /// Adds a component; returns false if an equal GAV was already present
    pub fn add_component(&mut self, gav: Gav) -> bool {
        self.components.insert(gav)
    }

    /// Adds an edge together with both endpoints; returns false if the
    /// identical edge was already present
    pub fn add_edge(&mut self, edge: DependencyEdge) -> bool {
        if self.edges.contains(&edge) {
            return false;
        }
        self.components.insert(edge.source.clone());
        self.components.insert(edge.target.clone());
        self.edges.insert(edge)
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }

    /// Components sharing a group and artifact, in version order
    pub fn versions_of<'a>(
        &'a self,
        group: &'a str,
        artifact: &'a str,
    ) -> impl Iterator<Item = &'a Gav> + 'a {
        let start = Gav::new(group, artifact, "");
        self.components
            .range(start..)
            .take_while(move |gav| gav.group() == group && gav.artifact() == artifact)
    }
}

impl ComponentLookup for AtomicGraph {
    fn find_component(&self, group: &str, artifact: &str, version: Option<&str>) -> Option<Gav> {
        if let Some(version) = version {
            let gav = Gav::new(group, artifact, version);
            return self.components.get(&gav).cloned();
        }

        let mut candidates = self.versions_of(group, artifact);
        let first = candidates.next()?;
        if candidates.next().is_some() {
            return None;
        }
        Some(first.clone())
    }
}
