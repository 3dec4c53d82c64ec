//! # Cart Transitions
//!
//! The four cart mutations as a typed state machine. `CartState::apply` is a
//! pure function: it consumes the old state and returns the new one, doing
//! no IO. Everything the reducer needs from the outside world (the line
//! snapshot, the stock ceiling) travels in the payload.

use super::entities::{CartLineItem, CartState};
use shared_bus::CartChangeKind;
use shared_types::ProductId;

/// A cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartTransition {
    /// Add one unit of a product.
    Add {
        /// Line to append if the product is not in the cart yet.
        item: CartLineItem,
        /// Quantity the line may not exceed. `None` means unbounded.
        ceiling: Option<u32>,
    },

    /// Replace a line's quantity. `quantity <= 0` removes the line.
    SetQuantity {
        product_id: ProductId,
        quantity: i64,
        /// Clamp target. A clamp to 0 removes the line.
        ceiling: Option<u32>,
    },

    /// Drop a line if present.
    Remove { product_id: ProductId },

    /// Empty the cart.
    Clear,
}

impl CartTransition {
    /// Notification kind for this transition.
    pub fn kind(&self) -> CartChangeKind {
        match self {
            Self::Add { .. } => CartChangeKind::Added,
            Self::SetQuantity { .. } => CartChangeKind::QuantitySet,
            Self::Remove { .. } => CartChangeKind::Removed,
            Self::Clear => CartChangeKind::Cleared,
        }
    }

    /// Product touched by this transition, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            Self::Add { item, .. } => Some(&item.product_id),
            Self::SetQuantity { product_id, .. } | Self::Remove { product_id } => Some(product_id),
            Self::Clear => None,
        }
    }
}

impl CartState {
    /// Applies a transition and returns the resulting state.
    pub fn apply(mut self, transition: CartTransition) -> CartState {
        match transition {
            CartTransition::Add { item, ceiling } => {
                let limit = ceiling.unwrap_or(u32::MAX);
                let items = self.items_mut();
                match items.iter_mut().find(|l| l.product_id == item.product_id) {
                    Some(line) => {
                        if line.quantity < limit {
                            line.quantity = line.quantity.saturating_add(1);
                        }
                    }
                    None => {
                        if limit >= 1 {
                            items.push(CartLineItem { quantity: 1, ..item });
                        }
                    }
                }
            }

            CartTransition::SetQuantity {
                product_id,
                quantity,
                ceiling,
            } => {
                let target = clamp_quantity(quantity, ceiling);
                let items = self.items_mut();
                if let Some(index) = items.iter().position(|l| l.product_id == product_id) {
                    if target == 0 {
                        items.remove(index);
                    } else {
                        items[index].quantity = target;
                    }
                }
            }

            CartTransition::Remove { product_id } => {
                self.items_mut().retain(|l| l.product_id != product_id);
            }

            CartTransition::Clear => {
                self.items_mut().clear();
            }
        }
        self
    }
}

/// Maps a requested quantity onto `0..=ceiling`; 0 means "remove".
fn clamp_quantity(requested: i64, ceiling: Option<u32>) -> u32 {
    if requested <= 0 {
        return 0;
    }
    let requested = u32::try_from(requested).unwrap_or(u32::MAX);
    match ceiling {
        Some(limit) => requested.min(limit),
        None => requested,
    }
}
