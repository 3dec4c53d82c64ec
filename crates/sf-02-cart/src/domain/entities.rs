//! Cart entities.
//!
//! `CartState` holds the line set and nothing else. Totals are computed from
//! the lines each time they are asked for, so they cannot drift.

use super::errors::CodecError;
use serde::{Deserialize, Serialize};
use shared_types::{Money, Product, ProductId};
use std::collections::HashSet;

/// Storage key of the persisted cart.
pub const CART_STATE_KEY: &str = "cart-state";

/// One product's entry in the cart.
///
/// Display fields are a snapshot taken when the product was first added and
/// are not refreshed from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub image_url: String,
    pub description: String,
    /// Always >= 1 inside a `CartState`.
    pub quantity: u32,
}

impl CartLineItem {
    /// Snapshots a product's display fields into a line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            quantity: 1,
        }
    }

    /// `quantity × unit_price`.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The authoritative cart: an ordered line set, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from a line sequence, checking the line invariants.
    ///
    /// # Errors
    /// - `ZeroQuantity` if a line has quantity 0
    /// - `DuplicateLine` if two lines share a product id
    pub fn from_items(items: Vec<CartLineItem>) -> Result<Self, CodecError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.quantity == 0 {
                return Err(CodecError::ZeroQuantity {
                    product_id: item.product_id.clone(),
                });
            }
            if !seen.insert(&item.product_id) {
                return Err(CodecError::DuplicateLine {
                    product_id: item.product_id.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Lines in cart order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<CartLineItem> {
        &mut self.items
    }

    /// Looks up the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|l| &l.product_id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    ///
    /// Widened to `u64` so lines at `u32::MAX` still sum exactly.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `quantity × unit_price` over all lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Read-only view for presentation code.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            item_count: self.item_count(),
            subtotal: self.subtotal(),
        }
    }
}

/// Read-only cart view handed to presentation code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub item_count: u64,
    pub subtotal: Money,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Storage key of the persisted line array (default: `cart-state`).
    pub storage_key: String,

    /// Stop incrementing once a line reaches the product's stock
    /// (default: false, adding never checks stock).
    pub enforce_stock_on_add: bool,

    /// Clamp `update_quantity` targets to the catalog stock (default: true).
    pub enforce_stock_on_set: bool,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: CART_STATE_KEY.to_string(),
            enforce_stock_on_add: false,
            enforce_stock_on_set: true,
        }
    }
}

impl CartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Enable or disable the stock check on add.
    pub fn with_enforce_stock_on_add(mut self, enforce: bool) -> Self {
        self.enforce_stock_on_add = enforce;
        self
    }

    /// Enable or disable the stock clamp on quantity set.
    pub fn with_enforce_stock_on_set(mut self, enforce: bool) -> Self {
        self.enforce_stock_on_set = enforce;
        self
    }
}
