//! JSON encoding of the persisted cart.
//!
//! The record is a bare array of line objects in cart order:
//!
//! ```json
//! [{"productId":"1","name":"Premium Wireless Headphones","unitPrice":29999,
//!   "imageUrl":"/assets/headphones.jpg","description":"...","quantity":2}]
//! ```

use super::entities::{CartLineItem, CartState};
use super::errors::CodecError;

/// Serializes lines to the persisted format.
pub fn encode(items: &[CartLineItem]) -> Result<String, CodecError> {
    serde_json::to_string(items).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Parses a persisted record back into a cart.
///
/// # Errors
/// - `Malformed` if the text is not a line array
/// - `ZeroQuantity` / `DuplicateLine` if a line breaks the cart invariants
pub fn decode(raw: &str) -> Result<CartState, CodecError> {
    let items: Vec<CartLineItem> =
        serde_json::from_str(raw).map_err(|e| CodecError::Malformed(e.to_string()))?;
    CartState::from_items(items)
}
