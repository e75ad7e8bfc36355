mod in_memory_store;
mod json_file_store;
mod snapshot_cell;

pub use in_memory_store::InMemoryGraphStore;
pub use json_file_store::JsonFileGraphStore;
