//! # Shared Storage - Client-Local Key-Value Storage
//!
//! The durable slot the storefront writes its cart and admin session into.
//! It models browser-local storage: string keys, string values, one storage
//! area shared by every subsystem of the same client.
//!
//! ## Adapters
//!
//! | Adapter | Backing | Use |
//! |---------|---------|-----|
//! | `InMemoryStore` | `HashMap` | Tests, `STOREFRONT_STORAGE=memory` |
//! | `FileBackedStore` | JSON object file, atomic rename | CLI sessions |
//!
//! Both adapters use interior mutability so a single `Arc<S>` handle can be
//! injected into the cart store and the admin session guard at once.

pub mod adapters;
pub mod ports;

pub use adapters::{FileBackedStore, InMemoryStore};
pub use ports::KeyValueStore;
pub use shared_types::StorageError;
