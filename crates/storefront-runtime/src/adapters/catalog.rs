//! Cart → Catalog adapter.

use parking_lot::RwLock;
use sf_01_catalog::{CatalogApi, InMemoryCatalog};
use sf_02_cart::CatalogProvider;
use shared_types::{Product, ProductId};
use std::sync::Arc;

/// Gives the cart read access to the shared catalog.
///
/// Products added through the admin console are visible to the cart's stock
/// clamp as soon as they are inserted.
#[derive(Clone)]
pub struct CatalogAdapter {
    catalog: Arc<RwLock<InMemoryCatalog>>,
}

impl CatalogAdapter {
    pub fn new(catalog: Arc<RwLock<InMemoryCatalog>>) -> Self {
        Self { catalog }
    }
}

impl CatalogProvider for CatalogAdapter {
    fn product(&self, id: &ProductId) -> Option<Product> {
        self.catalog.read().product(id).cloned()
    }
}
