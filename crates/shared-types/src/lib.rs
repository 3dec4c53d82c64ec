//! # Shared Types Crate
//!
//! This crate contains the domain entities and error types that cross
//! subsystem boundaries.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Product`, `ProductId` and `Money` are defined
//!   here and nowhere else. The catalog produces them, the cart consumes them.
//! - **Integer Money**: prices and totals are counted in minor units (paise).
//!   No floating point value ever carries a price.
//! - **Storage Errors**: every client-storage adapter reports failures through
//!   the single `StorageError` enum.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
