//! # Constraint Resolver
//!
//! Turns whatever string the metadata store holds into an optional minimum.
//!
//! ## Resolution Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stored value            Resolved                                       │
//! │  ────────────            ────────                                       │
//! │  (never written)         None                                           │
//! │  ""  / "   "             None                                           │
//! │  "abc" / "5.5" / "5x"    None                                           │
//! │  "0" / "-3"              None                                           │
//! │  "99999999999"           None   (beyond u32)                            │
//! │  "10" / " 10 " / "+10"   Some(10)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution never fails. Legacy or hand-edited data must not break
//! checkout, so anything unreadable means "no constraint", and a store that
//! cannot be read is logged and treated the same way.

use tracing::{debug, warn};

use crate::store::MetadataStore;
use crate::types::{MinimumQuantity, MinimumQuantityConstraint, ProductId};
use crate::MIN_QUANTITY_META_KEY;

/// Parses a raw stored value into a minimum.
///
/// ## Example
/// ```rust
/// use minqty_core::resolver::parse_minimum;
///
/// assert_eq!(parse_minimum(Some("12")).map(|m| m.get()), Some(12));
/// assert!(parse_minimum(Some("")).is_none());
/// assert!(parse_minimum(Some("0")).is_none());
/// assert!(parse_minimum(None).is_none());
/// ```
pub fn parse_minimum(raw: Option<&str>) -> Option<MinimumQuantity> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<u32>() {
        Ok(value) => MinimumQuantity::new(value),
        Err(_) => {
            debug!(raw = %raw, "Ignoring unreadable minimum quantity");
            None
        }
    }
}

/// Resolves minimums for products through a [`MetadataStore`].
///
/// ## Usage
/// ```rust,ignore
/// let store = MemoryMetaStore::new().with_value("7", MIN_QUANTITY_META_KEY, "4");
/// let resolver = ConstraintResolver::new(&store);
///
/// let minimum = resolver.resolve(&"7".into()).await;
/// assert_eq!(minimum.map(|m| m.get()), Some(4));
/// ```
#[derive(Debug)]
pub struct ConstraintResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> ConstraintResolver<'a, S>
where
    S: MetadataStore + ?Sized,
{
    /// Creates a resolver reading from `store`.
    pub fn new(store: &'a S) -> Self {
        ConstraintResolver { store }
    }

    /// Returns the effective minimum for `product_id`, if any.
    pub async fn resolve(&self, product_id: &ProductId) -> Option<MinimumQuantity> {
        match self.store.get_meta(product_id, MIN_QUANTITY_META_KEY).await {
            Ok(raw) => parse_minimum(raw.as_deref()),
            Err(err) => {
                warn!(
                    product_id = %product_id,
                    error = %err,
                    "Minimum quantity lookup failed, treating as unconstrained"
                );
                None
            }
        }
    }

    /// Resolves the full constraint value object for `product_id`.
    pub async fn constraint(&self, product_id: &ProductId) -> MinimumQuantityConstraint {
        MinimumQuantityConstraint {
            product_id: product_id.clone(),
            minimum: self.resolve(product_id).await,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryMetaStore;
    use proptest::prelude::*;

    #[test]
    fn test_parse_minimum() {
        assert_eq!(parse_minimum(Some("10")).map(MinimumQuantity::get), Some(10));
        assert_eq!(parse_minimum(Some(" 10 ")).map(MinimumQuantity::get), Some(10));
        assert_eq!(parse_minimum(Some("+3")).map(MinimumQuantity::get), Some(3));

        assert!(parse_minimum(None).is_none());
        assert!(parse_minimum(Some("")).is_none());
        assert!(parse_minimum(Some("   ")).is_none());
        assert!(parse_minimum(Some("0")).is_none());
        assert!(parse_minimum(Some("-5")).is_none());
        assert!(parse_minimum(Some("abc")).is_none());
        assert!(parse_minimum(Some("5.5")).is_none());
        assert!(parse_minimum(Some("5 units")).is_none());
        assert!(parse_minimum(Some("99999999999")).is_none());
    }

    #[tokio::test]
    async fn test_resolve_reads_fixed_key() {
        let store = MemoryMetaStore::new()
            .with_value("1", MIN_QUANTITY_META_KEY, "6")
            .with_value("1", "_other_key", "100");
        let resolver = ConstraintResolver::new(&store);

        assert_eq!(resolver.resolve(&"1".into()).await.map(MinimumQuantity::get), Some(6));
        assert!(resolver.resolve(&"2".into()).await.is_none());
    }

    #[tokio::test]
    async fn test_cleared_value_resolves_to_none() {
        let store = MemoryMetaStore::new().with_value("1", MIN_QUANTITY_META_KEY, "");
        let constraint = ConstraintResolver::new(&store).constraint(&"1".into()).await;

        assert!(!constraint.is_constrained());
        assert_eq!(constraint.product_id.as_str(), "1");
    }

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct Offline;

    struct BrokenStore;

    impl MetadataStore for BrokenStore {
        type Error = Offline;

        async fn get_meta(&self, _: &ProductId, _: &str) -> Result<Option<String>, Offline> {
            Err(Offline)
        }

        async fn set_meta(&self, _: &ProductId, _: &str, _: &str) -> Result<(), Offline> {
            Err(Offline)
        }
    }

    #[tokio::test]
    async fn test_store_failure_degrades_to_none() {
        let resolver = ConstraintResolver::new(&BrokenStore);
        assert!(resolver.resolve(&"1".into()).await.is_none());
    }

    proptest! {
        #[test]
        fn prop_positive_integers_resolve(n in 1u32..=u32::MAX) {
            prop_assert_eq!(parse_minimum(Some(&n.to_string())).map(MinimumQuantity::get), Some(n));
        }

        #[test]
        fn prop_non_positive_integers_are_absent(n in i64::MIN..=0i64) {
            prop_assert!(parse_minimum(Some(&n.to_string())).is_none());
        }

        #[test]
        fn prop_non_numeric_is_absent(s in "[a-zA-Z ._-]{0,12}") {
            prop_assert!(parse_minimum(Some(&s)).is_none());
        }
    }
}
