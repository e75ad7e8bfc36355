/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod aggregation;
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod store;
