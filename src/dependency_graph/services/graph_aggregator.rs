use crate::dependency_graph::domain::{
    AggregatedGraph, AggregationKey, AggregationToggles, AtomicGraph,
};

/// GraphAggregator service computing the quotient graph under a set of toggles
///
/// Contraction is a keyed fold: every component lands in the node of its
/// projected key and every edge between two different keys is merged into
/// the edge for that key pair. Edges whose endpoints collapse into the same
/// key are dropped. The optional flag does not survive aggregation.
pub struct GraphAggregator;

impl GraphAggregator {
    pub fn aggregate(graph: &AtomicGraph, toggles: AggregationToggles) -> AggregatedGraph {
        let mut aggregated = AggregatedGraph::empty(toggles);

        for gav in graph.components() {
            aggregated.absorb_member(AggregationKey::project(gav, toggles), gav.clone());
        }

        let mut elided = 0usize;
        for edge in graph.edges() {
            let source = AggregationKey::project(&edge.source, toggles);
            let target = AggregationKey::project(&edge.target, toggles);
            if source == target {
                elided += 1;
                continue;
            }
            aggregated.absorb_edge(source, target, std::iter::once(edge.scope.clone()), 1);
        }

        tracing::debug!(
            keep_group = toggles.keep_group,
            keep_version = toggles.keep_version,
            nodes = aggregated.node_count(),
            edges = aggregated.edge_count(),
            elided,
            "aggregated graph"
        );

        aggregated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::{DependencyEdge, Gav};

    fn sample_graph() -> AtomicGraph {
        let app = Gav::new("com.acme", "app", "1.0");
        let lib = Gav::new("com.acme", "lib", "1.0");
        let log4j_old = Gav::new("log4j", "log4j", "1.2");
        let log4j_new = Gav::new("log4j", "log4j", "2.0");
        let shaded = Gav::new("org.shaded", "log4j", "2.0");

        let mut graph = AtomicGraph::new();
        graph.add_edge(DependencyEdge::new(app.clone(), log4j_old.clone(), "compile", false));
        graph.add_edge(DependencyEdge::new(app.clone(), lib.clone(), "compile", false));
        graph.add_edge(DependencyEdge::new(lib.clone(), log4j_new.clone(), "test", false));
        graph.add_edge(DependencyEdge::new(lib, log4j_new.clone(), "test", true));
        graph.add_edge(DependencyEdge::new(app, shaded, "runtime", false));
        // collapses into a self-loop once versions are dropped
        graph.add_edge(DependencyEdge::new(log4j_new, log4j_old, "compile", false));
        graph
    }

    #[test]
    fn test_full_toggles_reproduce_atomic_graph() {
        let graph = sample_graph();
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::FULL);

        assert_eq!(aggregated.node_count(), graph.component_count());
        for node in aggregated.nodes() {
            assert_eq!(node.merged_count(), 1);
        }
        for edge in graph.edges() {
            let source = AggregationKey::project(&edge.source, AggregationToggles::FULL);
            let target = AggregationKey::project(&edge.target, AggregationToggles::FULL);
            let merged = aggregated.edge(&source, &target).unwrap();
            assert!(merged.scopes.contains(&edge.scope));
        }
        // the optional/non-optional pair folds into one aggregated edge
        assert_eq!(aggregated.edge_count(), graph.edge_count() - 1);
    }

    #[test]
    fn test_drop_version_merges_nodes_and_scopes() {
        let graph = sample_graph();
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::new(true, false));

        let log4j = AggregationKey::GroupArtifact {
            group: "log4j".to_string(),
            artifact: "log4j".to_string(),
        };
        assert_eq!(aggregated.node(&log4j).unwrap().merged_count(), 2);
        assert!(aggregated.edge(&log4j, &log4j).is_none());

        let lib = AggregationKey::GroupArtifact {
            group: "com.acme".to_string(),
            artifact: "lib".to_string(),
        };
        let edge = aggregated.edge(&lib, &log4j).unwrap();
        assert_eq!(edge.contributing_edges, 2);
        assert_eq!(edge.scope_label(), "test");
    }

    #[test]
    fn test_no_self_loops_under_any_toggles() {
        let graph = sample_graph();
        for (keep_group, keep_version) in [(true, true), (true, false), (false, true), (false, false)] {
            let aggregated =
                GraphAggregator::aggregate(&graph, AggregationToggles::new(keep_group, keep_version));
            for edge in aggregated.edges() {
                assert_ne!(edge.source, edge.target);
            }
        }
    }

    #[test]
    fn test_coarsest_toggles_never_have_more_nodes() {
        let graph = sample_graph();
        let count = |g, v| GraphAggregator::aggregate(&graph, AggregationToggles::new(g, v)).node_count();

        let coarsest = count(false, false);
        assert!(coarsest <= count(true, false));
        assert!(coarsest <= count(false, true));
        assert_eq!(coarsest, 3);
    }

    #[test]
    fn test_every_member_is_kept() {
        let graph = sample_graph();
        let aggregated = GraphAggregator::aggregate(&graph, AggregationToggles::new(false, false));

        let members: usize = aggregated.nodes().map(|n| n.merged_count()).sum();
        assert_eq!(members, graph.component_count());
    }

    #[test]
    fn test_empty_graph() {
        let aggregated = GraphAggregator::aggregate(&AtomicGraph::new(), AggregationToggles::FULL);
        assert!(aggregated.is_empty());
        assert_eq!(aggregated.edge_count(), 0);
    }
}
