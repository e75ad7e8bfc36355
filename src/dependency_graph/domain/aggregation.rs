use super::Gav;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which coordinates survive aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AggregationToggles {
    pub keep_group: bool,
    pub keep_version: bool,
}

impl AggregationToggles {
    /// Identity aggregation: every GAV is its own node
    pub const FULL: Self = Self {
        keep_group: true,
        keep_version: true,
    };

    pub fn new(keep_group: bool, keep_version: bool) -> Self {
        Self {
            keep_group,
            keep_version,
        }
    }

    /// Builds toggles from the "ignore" flags used by pair listings
    pub fn from_ignore_flags(ignore_group: bool, ignore_version: bool) -> Self {
        Self::new(!ignore_group, !ignore_version)
    }
}

impl Default for AggregationToggles {
    fn default() -> Self {
        Self::FULL
    }
}

/// A GAV projected under a set of toggles.
///
/// Each variant holds exactly the coordinates it keeps, so two GAVs merge
/// iff their projections are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregationKey {
    Full {
        group: String,
        artifact: String,
        version: String,
    },
    ArtifactVersion {
        artifact: String,
        version: String,
    },
    GroupArtifact {
        group: String,
        artifact: String,
    },
    ArtifactOnly {
        artifact: String,
    },
}

impl AggregationKey {
    /// Projects a GAV onto the key variant selected by the toggles
    pub fn project(gav: &Gav, toggles: AggregationToggles) -> Self {
        let group = gav.group().to_string();
        let artifact = gav.artifact().to_string();
        let version = gav.version().to_string();
        match (toggles.keep_group, toggles.keep_version) {
            (true, true) => AggregationKey::Full {
                group,
                artifact,
                version,
            },
            (false, true) => AggregationKey::ArtifactVersion { artifact, version },
            (true, false) => AggregationKey::GroupArtifact { group, artifact },
            (false, false) => AggregationKey::ArtifactOnly { artifact },
        }
    }

    pub fn artifact(&self) -> &str {
        match self {
            AggregationKey::Full { artifact, .. }
            | AggregationKey::ArtifactVersion { artifact, .. }
            | AggregationKey::GroupArtifact { artifact, .. }
            | AggregationKey::ArtifactOnly { artifact } => artifact,
        }
    }

    pub fn group(&self) -> Option<&str> {
        match self {
            AggregationKey::Full { group, .. } | AggregationKey::GroupArtifact { group, .. } => {
                Some(group)
            }
            _ => None,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            AggregationKey::Full { version, .. }
            | AggregationKey::ArtifactVersion { version, .. } => Some(version),
            _ => None,
        }
    }
}

impl fmt::Display for AggregationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationKey::Full {
                group,
                artifact,
                version,
            } => write!(f, "{}:{}:{}", group, artifact, version),
            AggregationKey::ArtifactVersion { artifact, version } => {
                write!(f, "{}:{}", artifact, version)
            }
            AggregationKey::GroupArtifact { group, artifact } => write!(f, "{}:{}", group, artifact),
            AggregationKey::ArtifactOnly { artifact } => write!(f, "{}", artifact),
        }
    }
}

/// One node of the quotient graph and the atomic GAVs merged into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedNode {
    pub key: AggregationKey,
    pub members: BTreeSet<Gav>,
}

impl AggregatedNode {
    pub fn merged_count(&self) -> usize {
        self.members.len()
    }
}

/// One edge of the quotient graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedEdge {
    pub source: AggregationKey,
    pub target: AggregationKey,
    pub scopes: BTreeSet<String>,
    /// Number of atomic edges folded into this one
    pub contributing_edges: usize,
}

impl AggregatedEdge {
    /// Scopes joined for display, e.g. `compile, test`
    pub fn scope_label(&self) -> String {
        self.scopes.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Quotient of the atomic graph under an [`AggregationKey`] projection.
///
/// Nodes and edges live in ordered maps so the structure is identical no
/// matter in which order it was folded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregatedGraph {
    toggles: AggregationToggles,
    nodes: BTreeMap<AggregationKey, AggregatedNode>,
    edges: BTreeMap<(AggregationKey, AggregationKey), AggregatedEdge>,
    successors: BTreeMap<AggregationKey, BTreeSet<AggregationKey>>,
    predecessors: BTreeMap<AggregationKey, BTreeSet<AggregationKey>>,
}

impl AggregatedGraph {
    pub fn empty(toggles: AggregationToggles) -> Self {
        Self {
            toggles,
            ..Self::default()
        }
    }

    pub fn toggles(&self) -> AggregationToggles {
        self.toggles
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &AggregatedNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &AggregatedEdge> {
        self.edges.values()
    }

    pub fn node(&self, key: &AggregationKey) -> Option<&AggregatedNode> {
        self.nodes.get(key)
    }

    pub fn contains(&self, key: &AggregationKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn edge(&self, source: &AggregationKey, target: &AggregationKey) -> Option<&AggregatedEdge> {
        self.edges.get(&(source.clone(), target.clone()))
    }

    /// Keys this node depends on
    pub fn successors<'a>(&'a self, key: &AggregationKey) -> impl Iterator<Item = &'a AggregationKey> {
        self.successors.get(key).into_iter().flatten()
    }

    /// Keys that depend on this node
    pub fn predecessors<'a>(
        &'a self,
        key: &AggregationKey,
    ) -> impl Iterator<Item = &'a AggregationKey> {
        self.predecessors.get(key).into_iter().flatten()
    }

    /// Adds `gav` to the node for `key`, creating the node if needed
    pub(crate) fn absorb_member(&mut self, key: AggregationKey, gav: Gav) {
        self.nodes
            .entry(key.clone())
            .or_insert_with(|| AggregatedNode {
                key,
                members: BTreeSet::new(),
            })
            .members
            .insert(gav);
    }

    /// Folds `count` atomic edges carrying `scopes` into the edge source -> target
    pub(crate) fn absorb_edge<I>(
        &mut self,
        source: AggregationKey,
        target: AggregationKey,
        scopes: I,
        count: usize,
    ) where
        I: IntoIterator<Item = String>,
    {
        let edge = self
            .edges
            .entry((source.clone(), target.clone()))
            .or_insert_with(|| AggregatedEdge {
                source: source.clone(),
                target: target.clone(),
                scopes: BTreeSet::new(),
                contributing_edges: 0,
            });
        edge.scopes.extend(scopes);
        edge.contributing_edges += count;

        self.successors
            .entry(source.clone())
            .or_default()
            .insert(target.clone());
        self.predecessors.entry(target).or_default().insert(source);
    }

    /// The subgraph induced by `keys`: those nodes and every edge between them
    pub fn induced_subgraph(&self, keys: &BTreeSet<AggregationKey>) -> Self {
        let mut subgraph = Self::empty(self.toggles);
        for key in keys {
            if let Some(node) = self.nodes.get(key) {
                subgraph.nodes.insert(key.clone(), node.clone());
            }
        }
        for ((source, target), edge) in &self.edges {
            if keys.contains(source) && keys.contains(target) {
                subgraph.absorb_edge(
                    source.clone(),
                    target.clone(),
                    edge.scopes.iter().cloned(),
                    edge.contributing_edges,
                );
            }
        }
        subgraph
    }
}

/// Traversal orientation over "depends on" edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// What the root depends on
    #[default]
    Forward,
    /// What depends on the root
    Reverse,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            _ => Err(format!(
                "Invalid direction: {}. Please specify 'forward' or 'reverse'",
                s
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// Hop bound for neighborhood queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    Bounded(u32),
    /// Full reachable closure
    #[default]
    Unbounded,
}

impl Depth {
    /// `None` means unbounded
    pub fn from_option(depth: Option<u32>) -> Self {
        depth.map_or(Depth::Unbounded, Depth::Bounded)
    }

    pub fn allows(&self, hops: u32) -> bool {
        match self {
            Depth::Bounded(limit) => hops <= *limit,
            Depth::Unbounded => true,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Bounded(n) => write!(f, "{}", n),
            Depth::Unbounded => write!(f, "all"),
        }
    }
}
