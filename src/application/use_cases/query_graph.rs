use crate::application::dto::{GraphViewRequest, ListingRequest};
use crate::application::read_models::{
    ComponentView, GraphView, PairView, ViewBuilder, ViewContext,
};
use crate::dependency_graph::domain::{AggregationKey, AggregationToggles, Direction, Gav};
use crate::dependency_graph::services::{artifact_matches, GraphQuery};
use crate::ports::outbound::{GraphAggregation, GraphStore, ProgressReporter};
use crate::shared::Result;
use std::collections::BTreeSet;
use std::sync::Arc;

/// QueryGraphUseCase - Read-side queries over the stored dependency graph
///
/// Every query works on one store snapshot, so a concurrent ingestion never
/// shows up half-applied. Aggregated views come from the injected
/// aggregation port, which may memoize them per snapshot revision.
///
/// # Type Parameters
/// * `GS` - GraphStore implementation
/// * `AG` - GraphAggregation implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryGraphUseCase<GS, AG, PR> {
    graph_store: Arc<GS>,
    aggregation: AG,
    progress_reporter: PR,
}

impl<GS, AG, PR> QueryGraphUseCase<GS, AG, PR>
where
    GS: GraphStore,
    AG: GraphAggregation,
    PR: ProgressReporter,
{
    /// Creates a new QueryGraphUseCase with injected dependencies
    pub fn new(graph_store: Arc<GS>, aggregation: AG, progress_reporter: PR) -> Self {
        Self {
            graph_store,
            aggregation,
            progress_reporter,
        }
    }

    /// Aggregated graph view, optionally narrowed to a root's neighborhood
    ///
    /// The root id is parsed leniently and projected to the requested
    /// toggles. A root that is not in the aggregated graph gives the full
    /// graph with `root_missing` set. Reverse views mark every ancestor of
    /// the root with the `highlight` class.
    pub async fn graph_view(&self, request: GraphViewRequest) -> Result<GraphView> {
        let snapshot = self.graph_store.snapshot().await?;
        let aggregated = self.aggregation.aggregate(&snapshot, request.toggles);
        let no_highlight = BTreeSet::new();

        let Some(root_id) = request.root.as_deref() else {
            let context = ViewContext {
                revision: snapshot.revision(),
                direction: request.direction,
                depth: request.depth,
                root: None,
                root_missing: false,
                highlight: &no_highlight,
            };
            return Ok(ViewBuilder::graph_view(&aggregated, &context));
        };

        let root = root_key(root_id, request.toggles);
        if !aggregated.contains(&root) {
            tracing::warn!(root = %root, "root not found in aggregated graph");
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Root '{}' is not in the graph; showing the full graph instead.",
                root
            ));
            let context = ViewContext {
                revision: snapshot.revision(),
                direction: request.direction,
                depth: request.depth,
                root: Some(&root),
                root_missing: true,
                highlight: &no_highlight,
            };
            return Ok(ViewBuilder::graph_view(&aggregated, &context));
        }

        let neighborhood =
            GraphQuery::neighbors(&aggregated, &root, request.direction, request.depth);
        let highlight: BTreeSet<AggregationKey> = match request.direction {
            Direction::Reverse => neighborhood
                .order
                .iter()
                .filter(|key| **key != root)
                .cloned()
                .collect(),
            Direction::Forward => BTreeSet::new(),
        };
        tracing::debug!(
            root = %root,
            direction = %request.direction,
            depth = %request.depth,
            visited = neighborhood.order.len(),
            "computed neighborhood"
        );

        let context = ViewContext {
            revision: snapshot.revision(),
            direction: request.direction,
            depth: request.depth,
            root: Some(&root),
            root_missing: false,
            highlight: &highlight,
        };
        Ok(ViewBuilder::graph_view(&neighborhood.graph, &context))
    }

    /// Deduplicated dependency pairs, sorted, cut to the request limit
    pub async fn pairs(&self, request: ListingRequest) -> Result<Vec<PairView>> {
        let snapshot = self.graph_store.snapshot().await?;
        let toggles =
            AggregationToggles::from_ignore_flags(request.ignore_group, request.ignore_version);
        let aggregated = self.aggregation.aggregate(&snapshot, toggles);

        let mut rows = GraphQuery::filter_pairs(&aggregated, &request.filter);
        let total = rows.len();
        if let Some(limit) = request.limit {
            rows.truncate(limit);
        }
        self.report_listing("pair(s)", rows.len(), total);

        Ok(ViewBuilder::pair_views(&rows))
    }

    /// Atomic components whose artifact contains the filter, sorted
    ///
    /// Components are listed exactly as stored; the ignore flags do not apply.
    pub async fn components(&self, request: ListingRequest) -> Result<Vec<ComponentView>> {
        let snapshot = self.graph_store.snapshot().await?;

        let matching: Vec<&Gav> = snapshot
            .components()
            .filter(|gav| artifact_matches(gav.artifact(), &request.filter))
            .collect();
        let total = matching.len();
        let shown = request.limit.map_or(total, |limit| limit.min(total));
        self.report_listing("component(s)", shown, total);

        Ok(ViewBuilder::component_views(matching.into_iter().take(shown)))
    }

    fn report_listing(&self, noun: &str, shown: usize, total: usize) {
        if shown < total {
            self.progress_reporter.report(&format!(
                "🔎 Showing {} of {} matching {}",
                shown, total, noun
            ));
        } else {
            self.progress_reporter
                .report(&format!("🔎 Found {} matching {}", total, noun));
        }
    }
}

/// Projects a user-supplied `group:artifact:version` id to the toggles
fn root_key(root_id: &str, toggles: AggregationToggles) -> AggregationKey {
    AggregationKey::project(&Gav::parse_lenient(root_id.trim()), toggles)
}
