//! # Catalog Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Resolves product ids to their authoritative price, stock and display
//! fields. The cart consumes this through its `CatalogProvider` port and
//! never mutates catalog data. The admin console adds products through
//! `CatalogApi::add_product`.
//!
//! ## Module Structure
//!
//! ```text
//! domain/catalog.rs - InMemoryCatalog (ordered product list)
//! domain/seed.rs    - The eight built-in mock products
//! domain/form.rs    - NewProductForm validation (admin add-product)
//! domain/errors.rs  - CatalogError
//! ports/inbound.rs  - CatalogApi trait
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
