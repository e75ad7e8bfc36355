//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod component_view;
pub mod graph_view;
pub mod view_builder;

pub use component_view::{ComponentView, PairView};
pub use graph_view::{EdgeView, GraphView, GraphViewMeta, NodeView};
pub use view_builder::{ViewBuilder, ViewContext, AGGREGATED_CLASS, HIGHLIGHT_CLASS, ROOT_CLASS};
