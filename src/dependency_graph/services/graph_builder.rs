use crate::dependency_graph::domain::{AtomicGraph, DependencyEdge, ResolvedDescriptor};

/// Outcome of folding one batch into the atomic graph
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub graph: AtomicGraph,
    pub added_components: usize,
    pub added_edges: usize,
}

impl BuildReport {
    pub fn changed(&self) -> bool {
        self.added_components > 0 || self.added_edges > 0
    }
}

/// GraphBuilder service folding resolved descriptors into the atomic graph
///
/// Pure function: takes ownership of a snapshot and returns the next one.
/// Components and edges are only added, never removed or changed.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Upserts every descriptor's own component, each dependency target and
    /// each edge. The revision is bumped only when something new was added,
    /// so re-ingesting the same batch leaves the graph untouched.
    pub fn build(mut graph: AtomicGraph, resolved: &[ResolvedDescriptor]) -> BuildReport {
        let mut added_components = 0;
        let mut added_edges = 0;

        for descriptor in resolved {
            if graph.add_component(descriptor.gav.clone()) {
                added_components += 1;
            }

            for dependency in &descriptor.dependencies {
                if graph.add_component(dependency.gav.clone()) {
                    added_components += 1;
                }
                let edge = DependencyEdge::new(
                    descriptor.gav.clone(),
                    dependency.gav.clone(),
                    dependency.scope.clone(),
                    dependency.optional,
                );
                if graph.add_edge(edge) {
                    added_edges += 1;
                }
            }
        }

        if added_components > 0 || added_edges > 0 {
            graph.bump_revision();
        }

        tracing::debug!(
            added_components,
            added_edges,
            revision = graph.revision(),
            "built atomic graph"
        );

        BuildReport {
            graph,
            added_components,
            added_edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::{Gav, ResolvedDependency};

    fn descriptor(gav: Gav, deps: Vec<(Gav, &str, bool)>) -> ResolvedDescriptor {
        ResolvedDescriptor {
            source_label: format!("{}/pom.xml", gav.artifact()),
            gav,
            parent: None,
            dependencies: deps
                .into_iter()
                .map(|(gav, scope, optional)| ResolvedDependency {
                    gav,
                    scope: scope.to_string(),
                    optional,
                })
                .collect(),
        }
    }

    #[test]
    fn test_build_adds_components_and_edges() {
        let app = Gav::new("com.acme", "app", "1.0");
        let log4j = Gav::new("log4j", "log4j", "1.2");
        let batch = vec![descriptor(app.clone(), vec![(log4j.clone(), "compile", false)])];

        let report = GraphBuilder::build(AtomicGraph::new(), &batch);

        assert_eq!(report.added_components, 2);
        assert_eq!(report.added_edges, 1);
        assert_eq!(report.graph.revision(), 1);
        assert!(report.graph.contains_component(&log4j));
        assert!(report.changed());
    }

    #[test]
    fn test_reingest_is_noop() {
        let app = Gav::new("com.acme", "app", "1.0");
        let junit = Gav::new("junit", "junit", "4.13.2");
        let batch = vec![descriptor(app, vec![(junit, "test", false)])];

        let first = GraphBuilder::build(AtomicGraph::new(), &batch);
        let second = GraphBuilder::build(first.graph.clone(), &batch);

        assert_eq!(second.graph, first.graph);
        assert_eq!(second.added_components, 0);
        assert_eq!(second.added_edges, 0);
        assert_eq!(second.graph.revision(), 1);
        assert!(!second.changed());
    }

    #[test]
    fn test_parallel_edges_with_different_scope() {
        let app = Gav::new("com.acme", "app", "1.0");
        let junit = Gav::new("junit", "junit", "4.13.2");
        let batch = vec![descriptor(
            app,
            vec![
                (junit.clone(), "test", false),
                (junit.clone(), "compile", false),
                (junit, "test", false),
            ],
        )];

        let report = GraphBuilder::build(AtomicGraph::new(), &batch);
        assert_eq!(report.added_edges, 2);
        assert_eq!(report.graph.edge_count(), 2);
    }

    #[test]
    fn test_append_only_across_batches() {
        let app = Gav::new("com.acme", "app", "1.0");
        let lib = Gav::new("com.acme", "lib", "1.0");
        let guava = Gav::new("com.google.guava", "guava", "33.0");

        let first = GraphBuilder::build(
            AtomicGraph::new(),
            &[descriptor(app.clone(), vec![(guava.clone(), "compile", false)])],
        );
        let second = GraphBuilder::build(
            first.graph.clone(),
            &[descriptor(lib, vec![(guava, "compile", true)])],
        );

        for edge in first.graph.edges() {
            assert!(second.graph.contains_edge(edge));
        }
        for gav in first.graph.components() {
            assert!(second.graph.contains_component(gav));
        }
        assert_eq!(second.graph.revision(), 2);
    }
}
