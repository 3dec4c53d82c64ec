//! # Inbound Port - CatalogApi
//!
//! Read access for shoppers and the cart, write access for the admin console.

use crate::domain::{CatalogError, NewProductForm};
use shared_types::{Product, ProductId};

/// Primary API for the Catalog subsystem.
///
/// # Example
///
/// ```rust,ignore
/// use sf_01_catalog::{CatalogApi, InMemoryCatalog};
///
/// let catalog = InMemoryCatalog::seeded();
/// for product in catalog.search("wireless") {
///     println!("{} {}", product.name, product.price);
/// }
/// ```
pub trait CatalogApi: Send + Sync {
    /// All products in listing order.
    fn products(&self) -> &[Product];

    /// Looks up a product by id.
    fn product(&self, id: &ProductId) -> Option<&Product>;

    /// Case-insensitive match on name or category. A blank term matches all.
    fn search(&self, term: &str) -> Vec<&Product>;

    /// Validates the form and appends a new product with a fresh id.
    ///
    /// # Errors
    /// - `MissingField`, `InvalidPrice`, `InvalidStock` from validation
    fn add_product(&mut self, form: NewProductForm) -> Result<Product, CatalogError>;
}
