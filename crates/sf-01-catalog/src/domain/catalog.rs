//! # In-Memory Catalog
//!
//! Ordered product list with id lookup. Products keep insertion order so
//! listings are stable; the id index gives O(1) lookup.

use super::errors::CatalogError;
use super::form::NewProductForm;
use super::seed::seed_products;
use crate::ports::CatalogApi;
use shared_bus::{EventPublisher, StorefrontEvent};
use shared_types::{Product, ProductId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Static catalog backed by a vector.
pub struct InMemoryCatalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
    publisher: Option<Arc<dyn EventPublisher>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            by_id: HashMap::new(),
            publisher: None,
        }
    }

    /// Creates a catalog holding the built-in mock products.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for product in seed_products() {
            // Seed ids are unique by construction
            let _ = catalog.insert(product);
        }
        catalog
    }

    /// Publishes `ProductAdded` through the given bus.
    pub fn with_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Inserts a fully-formed product.
    ///
    /// # Errors
    /// - `DuplicateProduct` if the id is already present
    pub fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.by_id.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }
        self.by_id.insert(product.id.clone(), self.products.len());
        self.products.push(product);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CatalogApi for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&index| self.products.get(index))
    }

    fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn add_product(&mut self, form: NewProductForm) -> Result<Product, CatalogError> {
        let product = form.validate(ProductId::generate())?;
        self.insert(product.clone())?;

        info!(
            product_id = %product.id,
            name = %product.name,
            price = %product.price,
            stock = product.stock,
            "[sf-01] Product added"
        );

        if let Some(publisher) = &self.publisher {
            publisher.publish(StorefrontEvent::ProductAdded {
                product_id: product.id.clone(),
                name: product.name.clone(),
            });
        }

        Ok(product)
    }
}
