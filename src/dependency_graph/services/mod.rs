mod descriptor_parser;
mod descriptor_tree;
mod graph_aggregator;
mod graph_builder;
mod graph_query;
mod identity_resolver;

pub use descriptor_parser::{DescriptorParser, MAX_DOCUMENT_SIZE};
pub use descriptor_tree::DescriptorTree;
pub use graph_aggregator::GraphAggregator;
pub use graph_builder::{BuildReport, GraphBuilder};
pub use graph_query::{artifact_matches, GraphQuery, Neighborhood, PairRow};
pub use identity_resolver::{
    interpolate, IdentityResolver, MAX_INTERPOLATION_PASSES, MAX_PARENT_HOPS,
};
