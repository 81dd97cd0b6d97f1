//! # Quantity Validator
//!
//! Decides what happens to a requested quantity once the minimum is known.
//!
//! ## Two Call Sites, Two Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  requested >= minimum (or no minimum)                                   │
//! │       └──► Accepted(requested)            no notice, either context     │
//! │                                                                         │
//! │  requested < minimum                                                    │
//! │       │                                                                 │
//! │       ├── AddToCart ──► Rejected          line is never created         │
//! │       │                                                                 │
//! │       └── CartUpdate ─► Corrected(min)    line already exists, raise it │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Add-to-cart refuses, cart-update raises. The two policies stay distinct
//! even though the violation is the same.
//!
//! Validation never errors. Every non-accepting outcome carries an
//! error-severity [`Notice`] for the caller to surface.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::notice::Notice;
use crate::resolver::ConstraintResolver;
use crate::store::MetadataStore;
use crate::types::{MinimumQuantity, Product};

/// Where the quantity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CartContext {
    /// A new line is being added.
    AddToCart,
    /// An existing line's quantity changed.
    CartUpdate,
}

/// Result of checking a quantity against a minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationOutcome {
    /// The quantity stands as requested.
    Accepted { quantity: u32 },

    /// The add-to-cart must be refused.
    Rejected {
        minimum: MinimumQuantity,
        notice: Notice,
    },

    /// The line quantity must be raised to `quantity`.
    Corrected { quantity: u32, notice: Notice },
}

impl ValidationOutcome {
    /// The quantity the cart should hold afterwards, `None` when rejected.
    pub fn admitted_quantity(&self) -> Option<u32> {
        match self {
            ValidationOutcome::Accepted { quantity } | ValidationOutcome::Corrected { quantity, .. } => {
                Some(*quantity)
            }
            ValidationOutcome::Rejected { .. } => None,
        }
    }

    /// The notice to surface, if any.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            ValidationOutcome::Accepted { .. } => None,
            ValidationOutcome::Rejected { notice, .. } | ValidationOutcome::Corrected { notice, .. } => {
                Some(notice)
            }
        }
    }

    /// Checks whether the request went through unchanged.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted { .. })
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Notice text for a refused add-to-cart.
pub fn add_to_cart_message(product_name: &str, minimum: MinimumQuantity) -> String {
    format!(
        "The minimum order quantity for {} is {}.",
        product_name, minimum
    )
}

/// Notice text for a corrected cart line.
pub fn cart_update_message(product_name: &str, minimum: MinimumQuantity) -> String {
    format!(
        "The minimum order quantity for {} is {}. The quantity has been updated to the minimum allowed.",
        product_name, minimum
    )
}

// =============================================================================
// Pure Check
// =============================================================================

/// Applies an already-resolved minimum to a requested quantity.
///
/// ## Example
/// ```rust
/// use minqty_core::validator::{check_quantity, CartContext, ValidationOutcome};
/// use minqty_core::MinimumQuantity;
///
/// let min = MinimumQuantity::new(10);
///
/// let outcome = check_quantity("P", min, 3, CartContext::CartUpdate);
/// assert_eq!(outcome.admitted_quantity(), Some(10));
///
/// let outcome = check_quantity("P", min, 3, CartContext::AddToCart);
/// assert_eq!(outcome.admitted_quantity(), None);
/// ```
pub fn check_quantity(
    product_name: &str,
    minimum: Option<MinimumQuantity>,
    requested: u32,
    context: CartContext,
) -> ValidationOutcome {
    let minimum = match minimum {
        Some(min) if !min.admits(requested) => min,
        _ => return ValidationOutcome::Accepted { quantity: requested },
    };

    match context {
        CartContext::AddToCart => ValidationOutcome::Rejected {
            minimum,
            notice: Notice::error(add_to_cart_message(product_name, minimum)),
        },
        CartContext::CartUpdate => ValidationOutcome::Corrected {
            quantity: minimum.get(),
            notice: Notice::error(cart_update_message(product_name, minimum)),
        },
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Resolves a product's minimum and checks a quantity against it.
#[derive(Debug)]
pub struct QuantityValidator<'a, S: ?Sized> {
    resolver: ConstraintResolver<'a, S>,
}

impl<'a, S> QuantityValidator<'a, S>
where
    S: MetadataStore + ?Sized,
{
    /// Creates a validator backed by `store`.
    pub fn new(store: &'a S) -> Self {
        QuantityValidator {
            resolver: ConstraintResolver::new(store),
        }
    }

    /// Validates `requested` units of `product` in the given context.
    pub async fn validate(
        &self,
        product: &Product,
        requested: u32,
        context: CartContext,
    ) -> ValidationOutcome {
        let minimum = self.resolver.resolve(&product.id).await;
        check_quantity(&product.name, minimum, requested, context)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
