//! # Core Domain Entities
//!
//! Defines the catalog entities shared by every storefront subsystem.
//!
//! ## Clusters
//!
//! - **Identity**: `ProductId`
//! - **Money**: `Money` (integer minor units, exact arithmetic)
//! - **Catalog**: `Product`, `StockLevel`

use crate::errors::MoneyParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Identifier of a catalog entry.
///
/// Seeded products use short numeric ids ("1".."8"); products created through
/// the admin console receive a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// =============================================================================
// CLUSTER B: MONEY
// =============================================================================

/// Number of minor units in one major unit (100 paise = 1 rupee).
pub const MINOR_PER_MAJOR: u64 = 100;

/// Basis points in 100%.
const BASIS_POINTS: u128 = 10_000;

/// A non-negative amount of money in minor units.
///
/// Arithmetic saturates at `u64::MAX` instead of wrapping, so derived totals
/// can never silently go backwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Creates an amount from whole major units.
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Returns the amount in minor units.
    pub const fn minor(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, saturating at the maximum.
    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiplies a unit price by a quantity, saturating at the maximum.
    pub const fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(quantity as u64))
    }

    /// Returns `basis_points / 10_000` of this amount, rounded half-up to the
    /// nearest minor unit.
    ///
    /// 18% is `1_800` basis points.
    pub fn percent(self, basis_points: u32) -> Money {
        let scaled = u128::from(self.0) * u128::from(basis_points) + BASIS_POINTS / 2;
        let value = scaled / BASIS_POINTS;
        Money(u64::try_from(value).unwrap_or(u64::MAX))
    }

    /// Parses a decimal amount such as `"299.99"`, `"59.9"` or `"1200"`.
    ///
    /// At most two fractional digits are accepted. Surrounding whitespace is
    /// ignored; signs, exponents and grouping separators are rejected.
    pub fn parse(input: &str) -> Result<Money, MoneyParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::InvalidDigit(trimmed.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError::InvalidDigit(trimmed.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooManyDecimals(trimmed.to_string()));
        }

        let major: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::Overflow(trimmed.to_string()))?
        };
        let minor: u64 = match fraction.len() {
            0 => 0,
            1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction
                .parse()
                .map_err(|_| MoneyParseError::InvalidDigit(trimmed.to_string()))?,
        };

        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .map(Money)
            .ok_or_else(|| MoneyParseError::Overflow(trimmed.to_string()))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// Formats with the rupee sign and Indian digit grouping (`₹1,23,456.78`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.0 / MINOR_PER_MAJOR;
        let minor = self.0 % MINOR_PER_MAJOR;
        write!(f, "₹{}.{:02}", group_indian(major), minor)
    }
}

/// Groups the last three digits, then every two digits before them.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// CLUSTER C: CATALOG
// =============================================================================

/// Stock at or below which the storefront shows an "Only N left" badge.
pub const SCARCITY_THRESHOLD: u32 = 5;

/// Stock below which the admin table reports "Low Stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A catalog entry.
///
/// `stock` is the ceiling a cart line may be set to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image location (URL or asset path).
    pub image_url: String,
    /// Units available.
    pub stock: u32,
    /// Category slug.
    pub category: String,
}

impl Product {
    /// Returns the admin stock classification.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.stock)
    }

    /// Returns `Some(stock)` when the shopper-facing scarcity badge applies.
    pub fn scarcity_hint(&self) -> Option<u32> {
        (self.stock > 0 && self.stock <= SCARCITY_THRESHOLD).then_some(self.stock)
    }

    /// Returns true if at least one unit is available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Stock classification shown in the admin product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockLevel {
    /// No units left.
    OutOfStock,
    /// Fewer than `LOW_STOCK_THRESHOLD` units.
    Low,
    /// Comfortable stock.
    InStock,
}

impl StockLevel {
    /// Classifies a stock count.
    pub fn classify(stock: u32) -> Self {
        match stock {
            0 => Self::OutOfStock,
            s if s < LOW_STOCK_THRESHOLD => Self::Low,
            _ => Self::InStock,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::Low => "Low Stock",
            Self::InStock => "In Stock",
        }
    }
}
