//! Order summary shown beside the cart.

use super::entities::CartSnapshot;
use serde::Serialize;
use shared_types::Money;

/// GST rate in basis points (18%).
pub const GST_BASIS_POINTS: u32 = 1_800;

/// Totals derived from a cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub item_count: u64,
    pub subtotal: Money,
    /// Shipping is always free.
    pub shipping: Money,
    /// GST on the subtotal, rounded half-up to the minor unit.
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn from_snapshot(snapshot: &CartSnapshot) -> Self {
        let subtotal = snapshot.subtotal;
        let shipping = Money::ZERO;
        let tax = subtotal.percent(GST_BASIS_POINTS);
        Self {
            item_count: snapshot.item_count,
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
        }
    }
}

impl From<&CartSnapshot> for OrderSummary {
    fn from(snapshot: &CartSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}
