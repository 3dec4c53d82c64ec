//! Catalog error types.

use shared_types::{MoneyParseError, ProductId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] MoneyParseError),

    #[error("Invalid stock quantity: {0}")]
    InvalidStock(String),

    #[error("Product already exists: {0}")]
    DuplicateProduct(ProductId),
}
