//! # Inbound Port - CartApi
//!
//! What presentation code calls. Mutations never fail: invalid input is a
//! no-op and storage problems are reported through the bus.

use crate::domain::CartSnapshot;
use shared_types::{Product, ProductId};

/// Primary API for the Cart subsystem.
pub trait CartApi {
    /// Adds one unit of `product`, appending a line on first add.
    fn add_to_cart(&mut self, product: &Product);

    /// Sets a line's quantity. `<= 0` removes it; unknown ids are ignored.
    fn update_quantity(&mut self, product_id: &ProductId, quantity: i64);

    /// Removes a line. Removing an absent line does nothing.
    fn remove_from_cart(&mut self, product_id: &ProductId);

    /// Empties the cart and deletes the persisted record.
    fn clear_cart(&mut self);

    /// Current read-only view.
    fn snapshot(&self) -> CartSnapshot;
}
