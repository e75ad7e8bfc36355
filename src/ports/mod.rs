/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: use cases are called directly by the
/// CLI and need no inbound trait.
pub mod outbound;
