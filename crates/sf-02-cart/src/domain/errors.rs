//! Cart error types.

use shared_types::ProductId;
use thiserror::Error;

/// Errors from decoding a persisted cart record.
///
/// These never leave the store: a record that fails to decode is discarded
/// and the cart starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Malformed cart record: {0}")]
    Malformed(String),

    #[error("Cart line for product {product_id} has zero quantity")]
    ZeroQuantity { product_id: ProductId },

    #[error("Cart record has more than one line for product {product_id}")]
    DuplicateLine { product_id: ProductId },

    #[error("Cart could not be encoded: {0}")]
    Encode(String),
}
