use super::GraphAggregator;
use crate::dependency_graph::domain::{
    AggregatedGraph, AggregationKey, AggregationToggles, AtomicGraph, Depth, Direction,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Result of a neighborhood query
#[derive(Debug, Clone)]
pub struct Neighborhood {
    pub root: AggregationKey,
    pub direction: Direction,
    pub depth: Depth,
    /// Visited keys in BFS order, root first
    pub order: Vec<AggregationKey>,
    /// Subgraph induced by the visited keys
    pub graph: AggregatedGraph,
}

impl Neighborhood {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// One deduplicated (source, target) relationship with its scopes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PairRow {
    pub source: AggregationKey,
    pub target: AggregationKey,
    pub scopes: BTreeSet<String>,
}

/// GraphQuery service for traversal and pair listing over aggregated graphs
pub struct GraphQuery;

impl GraphQuery {
    /// Breadth-first walk from `root` along successors (forward) or
    /// predecessors (reverse), at most `depth` hops away.
    ///
    /// Each key is emitted once, so cycles terminate. A root that is not in
    /// the graph gives an empty neighborhood.
    pub fn neighbors(
        graph: &AggregatedGraph,
        root: &AggregationKey,
        direction: Direction,
        depth: Depth,
    ) -> Neighborhood {
        let mut order = Vec::new();
        let mut visited = BTreeSet::new();

        if graph.contains(root) {
            let mut queue = VecDeque::from([(root.clone(), 0u32)]);
            visited.insert(root.clone());

            while let Some((key, hops)) = queue.pop_front() {
                order.push(key.clone());
                if !depth.allows(hops + 1) {
                    continue;
                }
                let next: Vec<&AggregationKey> = match direction {
                    Direction::Forward => graph.successors(&key).collect(),
                    Direction::Reverse => graph.predecessors(&key).collect(),
                };
                for neighbor in next {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back((neighbor.clone(), hops + 1));
                    }
                }
            }
        }

        Neighborhood {
            root: root.clone(),
            direction,
            depth,
            order,
            graph: graph.induced_subgraph(&visited),
        }
    }

    /// Every key that can reach `root`, root excluded
    pub fn ancestors(graph: &AggregatedGraph, root: &AggregationKey) -> BTreeSet<AggregationKey> {
        let mut ancestors: BTreeSet<AggregationKey> =
            Self::neighbors(graph, root, Direction::Reverse, Depth::Unbounded)
                .order
                .into_iter()
                .collect();
        ancestors.remove(root);
        ancestors
    }

    /// Deduplicated (source, target) pairs after re-aggregating the atomic
    /// graph, keeping those whose source or target artifact contains
    /// `filter` (case-insensitive; empty matches all). Sorted.
    pub fn pairs(
        graph: &AtomicGraph,
        filter: &str,
        ignore_version: bool,
        ignore_group: bool,
    ) -> Vec<(AggregationKey, AggregationKey)> {
        Self::pair_rows(graph, filter, ignore_version, ignore_group)
            .into_iter()
            .map(|row| (row.source, row.target))
            .collect()
    }

    /// Same selection as [`GraphQuery::pairs`], with each row's scope set
    pub fn pair_rows(
        graph: &AtomicGraph,
        filter: &str,
        ignore_version: bool,
        ignore_group: bool,
    ) -> Vec<PairRow> {
        let toggles = AggregationToggles::from_ignore_flags(ignore_group, ignore_version);
        let aggregated = GraphAggregator::aggregate(graph, toggles);
        Self::filter_pairs(&aggregated, filter)
    }

    /// Pair rows of an already aggregated graph whose source or target
    /// artifact contains `filter`
    pub fn filter_pairs(aggregated: &AggregatedGraph, filter: &str) -> Vec<PairRow> {
        let needle = filter.to_lowercase();

        let mut rows: BTreeMap<(AggregationKey, AggregationKey), PairRow> = BTreeMap::new();
        for edge in aggregated.edges() {
            if !(matches_filter(&edge.source, &needle) || matches_filter(&edge.target, &needle)) {
                continue;
            }
            rows.entry((edge.source.clone(), edge.target.clone()))
                .or_insert_with(|| PairRow {
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    scopes: BTreeSet::new(),
                })
                .scopes
                .extend(edge.scopes.iter().cloned());
        }

        rows.into_values().collect()
    }
}

fn matches_filter(key: &AggregationKey, needle: &str) -> bool {
    needle.is_empty() || key.artifact().to_lowercase().contains(needle)
}

/// Case-insensitive artifact substring match; an empty filter matches all
pub fn artifact_matches(artifact: &str, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    needle.is_empty() || artifact.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::{DependencyEdge, Gav};

    fn key(gav: &Gav) -> AggregationKey {
        AggregationKey::project(gav, AggregationToggles::FULL)
    }

    fn chain_graph() -> (AtomicGraph, Vec<Gav>) {
        // a -> b -> c -> d, plus e -> c
        let gavs: Vec<Gav> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|name| Gav::new("com.acme", *name, "1.0"))
            .collect();
        let mut graph = AtomicGraph::new();
        for (s, t) in [(0, 1), (1, 2), (2, 3), (4, 2)] {
            graph.add_edge(DependencyEdge::new(gavs[s].clone(), gavs[t].clone(), "compile", false));
        }
        (graph, gavs)
    }

    #[test]
    fn test_neighbors_forward_bounded() {
        let (graph, gavs) = chain_graph();
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::FULL);

        let one = GraphQuery::neighbors(&aggregated, &key(&gavs[0]), Direction::Forward, Depth::Bounded(1));
        assert_eq!(one.order, vec![key(&gavs[0]), key(&gavs[1])]);
        assert_eq!(one.graph.edge_count(), 1);

        let zero = GraphQuery::neighbors(&aggregated, &key(&gavs[0]), Direction::Forward, Depth::Bounded(0));
        assert_eq!(zero.order, vec![key(&gavs[0])]);
    }

    #[test]
    fn test_neighbors_reverse_unbounded() {
        let (graph, gavs) = chain_graph();
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::FULL);

        let result = GraphQuery::neighbors(&aggregated, &key(&gavs[3]), Direction::Reverse, Depth::Unbounded);
        let visited: BTreeSet<_> = result.order.iter().cloned().collect();

        assert_eq!(result.order[0], key(&gavs[3]));
        assert_eq!(visited.len(), 5);
        assert_eq!(result.order.len(), 5);
    }

    #[test]
    fn test_neighbors_cycle_emits_each_once() {
        let x = Gav::new("com.acme", "x", "1.0");
        let y = Gav::new("com.acme", "y", "1.0");
        let mut graph = AtomicGraph::new();
        graph.add_edge(DependencyEdge::new(x.clone(), y.clone(), "compile", false));
        graph.add_edge(DependencyEdge::new(y.clone(), x.clone(), "compile", false));
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::FULL);

        let result = GraphQuery::neighbors(&aggregated, &key(&x), Direction::Forward, Depth::Unbounded);
        assert_eq!(result.order, vec![key(&x), key(&y)]);
        assert_eq!(result.graph.edge_count(), 2);
    }

    #[test]
    fn test_neighbors_unknown_root_is_empty() {
        let (graph, _) = chain_graph();
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::FULL);
        let missing = key(&Gav::new("org.nowhere", "ghost", "0"));

        let result = GraphQuery::neighbors(&aggregated, &missing, Direction::Forward, Depth::Unbounded);
        assert!(result.is_empty());
        assert!(result.graph.is_empty());
    }

    #[test]
    fn test_ancestors_exclude_root() {
        let (graph, gavs) = chain_graph();
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::FULL);

        let ancestors = GraphQuery::ancestors(&aggregated, &key(&gavs[2]));
        let expected: BTreeSet<_> = [&gavs[0], &gavs[1], &gavs[4]].into_iter().map(key).collect();
        assert_eq!(ancestors, expected);
    }

    #[test]
    fn test_pairs_filter_case_insensitive() {
        let app = Gav::new("com.acme", "app", "1.0");
        let log4j = Gav::new("log4j", "Log4J-Core", "2.0");
        let guava = Gav::new("com.google.guava", "guava", "33.0");
        let mut graph = AtomicGraph::new();
        graph.add_edge(DependencyEdge::new(app.clone(), log4j, "compile", false));
        graph.add_edge(DependencyEdge::new(app, guava, "compile", false));

        let pairs = GraphQuery::pairs(&graph, "log4j", false, false);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1.artifact(), "Log4J-Core");

        assert_eq!(GraphQuery::pairs(&graph, "", false, false).len(), 2);
        assert!(GraphQuery::pairs(&graph, "nothing-matches", false, false).is_empty());
    }

    #[test]
    fn test_filter_whitespace_is_part_of_the_substring() {
        let app = Gav::new("com.acme", "app", "1.0");
        let log4j = Gav::new("org.apache.logging.log4j", "log4j-core", "2.20.0");
        let mut graph = AtomicGraph::new();
        graph.add_edge(DependencyEdge::new(app, log4j, "compile", false));

        assert!(GraphQuery::pairs(&graph, " core", false, false).is_empty());
        assert_eq!(GraphQuery::pairs(&graph, "-core", false, false).len(), 1);

        assert!(!artifact_matches("log4j-core", " core"));
        assert!(artifact_matches("log4j-core", "CORE"));
        assert!(artifact_matches("log4j-core", ""));
    }

    #[test]
    fn test_ignore_version_never_adds_pairs() {
        let app = Gav::new("com.acme", "app", "1.0");
        let app2 = Gav::new("com.acme", "app", "2.0");
        let log4j1 = Gav::new("log4j", "log4j", "1.2");
        let log4j2 = Gav::new("log4j", "log4j", "2.0");
        let mut graph = AtomicGraph::new();
        graph.add_edge(DependencyEdge::new(app, log4j1, "compile", false));
        graph.add_edge(DependencyEdge::new(app2, log4j2, "test", false));

        let exact = GraphQuery::pairs(&graph, "", false, false);
        let collapsed = GraphQuery::pair_rows(&graph, "", true, false);

        assert_eq!(exact.len(), 2);
        assert_eq!(collapsed.len(), 1);
        assert!(collapsed.len() <= exact.len());
        assert_eq!(
            collapsed[0].scopes.iter().cloned().collect::<Vec<_>>(),
            vec!["compile".to_string(), "test".to_string()]
        );
    }

    #[test]
    fn test_pairs_are_sorted() {
        let (graph, _) = chain_graph();
        let pairs = GraphQuery::pairs(&graph, "", false, false);
        let mut sorted = pairs.clone();
        sorted.sort();
        assert_eq!(pairs, sorted);
    }
}
