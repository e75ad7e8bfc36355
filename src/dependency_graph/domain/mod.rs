pub mod aggregation;
pub mod atomic_graph;
pub mod descriptor;
pub mod gav;
pub mod resolution;

pub use aggregation::{
    AggregatedEdge, AggregatedGraph, AggregatedNode, AggregationKey, AggregationToggles, Depth,
    Direction,
};
pub use atomic_graph::{AtomicGraph, DependencyEdge};
pub use descriptor::{
    ParentReference, PropertyTable, RawCoordinates, RawDependency, RawDescriptor, DEFAULT_SCOPE,
};
pub use gav::{Gav, UNKNOWN};
pub use resolution::{
    ComponentLookup, CoordinateField, NoPriorComponents, ResolutionOutcome, ResolutionWarning,
    ResolvedDependency, ResolvedDescriptor, WarningKind,
};
