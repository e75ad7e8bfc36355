//! Component view structs for read model
//!
//! These structs provide a flattened, query-optimized view of component data.

use crate::dependency_graph::domain::Gav;
use serde::Serialize;

/// View representation of one atomic component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentView {
    /// `group:artifact:version`
    pub id: String,
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl From<&Gav> for ComponentView {
    fn from(gav: &Gav) -> Self {
        Self {
            id: gav.to_string(),
            group: gav.group().to_string(),
            artifact: gav.artifact().to_string(),
            version: gav.version().to_string(),
        }
    }
}

/// View representation of one deduplicated dependency pair
///
/// Coordinates dropped by aggregation are `None` and render as blank columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairView {
    pub source_group: Option<String>,
    pub source_artifact: String,
    pub source_version: Option<String>,
    pub target_group: Option<String>,
    pub target_artifact: String,
    pub target_version: Option<String>,
    /// Scopes joined with `", "`, sorted
    pub scope: String,
}
