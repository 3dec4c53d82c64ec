//! Storage adapters implementing the `KeyValueStore` port.

pub mod file;
pub mod memory;

pub use file::FileBackedStore;
pub use memory::InMemoryStore;
