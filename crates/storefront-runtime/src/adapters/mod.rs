//! Adapters implementing subsystem outbound ports.

pub mod catalog;

pub use catalog::CatalogAdapter;
