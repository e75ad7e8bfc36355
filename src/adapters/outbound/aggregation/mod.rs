mod caching_aggregator;
mod direct_aggregator;

pub use caching_aggregator::CachingAggregator;
pub use direct_aggregator::DirectAggregator;
