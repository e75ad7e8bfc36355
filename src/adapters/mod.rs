/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the filesystem, the console and
/// the graph store. The CLI in `main.rs` is the only driving adapter.
pub mod outbound;
