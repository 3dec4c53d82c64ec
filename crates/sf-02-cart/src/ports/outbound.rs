//! # Outbound Ports
//!
//! What the cart needs from its surroundings. Storage and the bus come from
//! the shared crates; the catalog lookup is declared here.

use shared_types::{Product, ProductId};
use std::sync::Arc;

/// Catalog lookup used for the stock ceiling.
pub trait CatalogProvider: Send + Sync {
    /// Current catalog entry for a product, if the catalog knows it.
    fn product(&self, id: &ProductId) -> Option<Product>;
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for Arc<T> {
    fn product(&self, id: &ProductId) -> Option<Product> {
        (**self).product(id)
    }
}

/// Catalog that knows nothing. Quantity sets are never clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCatalog;

impl CatalogProvider for NoCatalog {
    fn product(&self, _id: &ProductId) -> Option<Product> {
        None
    }
}
