//! # Domain Types
//!
//! Core domain types used throughout minqty.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │    Product      │   │  MinimumQuantity    │   │  Constraint      │  │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ──────────────  │  │
//! │  │  id (opaque)    │   │  NonZeroU32         │   │  product_id      │  │
//! │  │  sku            │   │  always > 0         │   │  minimum: Option │  │
//! │  │  name           │   └─────────────────────┘   └──────────────────┘  │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Products are owned by the host. This crate never creates or destroys  │
//! │  them; it only attaches a minimum through the metadata store.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product Identifier
// =============================================================================

/// Opaque product identifier.
///
/// Hosts that number their products carry the decimal string, so `"42"` and
/// a UUID are equally valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as seen by the constraint engine.
///
/// Only the fields the engine reads are modelled; the name is what appears in
/// customer-facing notices.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Host identifier.
    pub id: ProductId,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name used in notices.
    pub name: String,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Minimum Quantity
// =============================================================================

/// A strictly positive minimum order quantity.
///
/// The zero case is unrepresentable: a stored `"0"` means "no constraint" and
/// never reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct MinimumQuantity(#[ts(type = "number")] NonZeroU32);

impl MinimumQuantity {
    /// Creates a minimum, returning `None` for zero.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(MinimumQuantity(v)),
            None => None,
        }
    }

    /// Returns the minimum as a plain integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Checks whether `quantity` satisfies this minimum.
    #[inline]
    pub const fn admits(self, quantity: u32) -> bool {
        quantity >= self.0.get()
    }
}

impl fmt::Display for MinimumQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Constraint
// =============================================================================

/// The effective minimum for one product.
///
/// `minimum == None` admits every quantity of at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MinimumQuantityConstraint {
    pub product_id: ProductId,
    pub minimum: Option<MinimumQuantity>,
}

impl MinimumQuantityConstraint {
    /// A constraint that admits everything.
    pub fn unconstrained(product_id: ProductId) -> Self {
        MinimumQuantityConstraint {
            product_id,
            minimum: None,
        }
    }

    /// Checks whether a minimum is set.
    #[inline]
    pub fn is_constrained(&self) -> bool {
        self.minimum.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_rejects_zero() {
        assert!(MinimumQuantity::new(0).is_none());
        assert_eq!(MinimumQuantity::new(7).map(MinimumQuantity::get), Some(7));
    }

    #[test]
    fn test_minimum_admits() {
        let min = MinimumQuantity::new(10).unwrap();
        assert!(!min.admits(9));
        assert!(min.admits(10));
        assert!(min.admits(11));
    }

    #[test]
    fn test_product_id_display() {
        let id = ProductId::from("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_minimum_serializes_as_number() {
        let min = MinimumQuantity::new(5).unwrap();
        assert_eq!(serde_json::to_string(&min).unwrap(), "5");
    }

    #[test]
    fn test_unconstrained() {
        let c = MinimumQuantityConstraint::unconstrained(ProductId::from("1"));
        assert!(!c.is_constrained());
    }
}
