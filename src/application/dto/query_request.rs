use crate::dependency_graph::domain::{AggregationToggles, Depth, Direction};

/// GraphViewRequest - Request DTO for an aggregated graph view
#[derive(Debug, Clone, Default)]
pub struct GraphViewRequest {
    pub toggles: AggregationToggles,
    /// Root as a `group:artifact:version` string; partial ids are accepted
    pub root: Option<String>,
    pub direction: Direction,
    pub depth: Depth,
}

impl GraphViewRequest {
    pub fn new(toggles: AggregationToggles) -> Self {
        Self {
            toggles,
            ..Self::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<String>, direction: Direction, depth: Depth) -> Self {
        self.root = Some(root.into());
        self.direction = direction;
        self.depth = depth;
        self
    }
}

/// ListingRequest - Request DTO for pair and component listings
#[derive(Debug, Clone, Default)]
pub struct ListingRequest {
    /// Case-insensitive artifact substring; empty matches everything
    pub filter: String,
    pub ignore_group: bool,
    pub ignore_version: bool,
    /// Maximum number of rows; `None` means no limit
    pub limit: Option<usize>,
}

impl ListingRequest {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }

    pub fn ignoring(mut self, ignore_group: bool, ignore_version: bool) -> Self {
        self.ignore_group = ignore_group;
        self.ignore_version = ignore_version;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}
