//! # Validation Module
//!
//! Host input checks that run before the constraint engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront widget                                            │
//! │  ├── min/step attributes from QuantityInputArgs                        │
//! │  └── Immediate shopper feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── quantity is a positive integer within bounds                      │
//! │  └── identifiers are present and sane                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: QuantityValidator                                            │
//! │  └── minimum order quantity (outcome, never an error)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use minqty_core::validation::{validate_product_id, validate_quantity};
//!
//! let id = validate_product_id(" 42 ").unwrap();
//! assert_eq!(id.as_str(), "42");
//!
//! assert_eq!(validate_quantity(5).unwrap(), 5);
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::ProductId;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product identifier.
const MAX_PRODUCT_ID_LEN: usize = 64;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates and normalizes a product identifier.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 64 characters
/// - No whitespace or control characters inside
pub fn validate_product_id(id: &str) -> ValidationResult<ProductId> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product_id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product_id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: "product_id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(ProductId::new(id))
}

/// Validates a cart line key.
pub fn validate_line_key(key: &str) -> ValidationResult<()> {
    if key.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "line_key".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested quantity and narrows it to `u32`.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// The minimum order quantity is NOT checked here; that is an outcome of
/// [`check_quantity`](crate::validator::check_quantity), not an input error.
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::from(MAX_ITEM_QUANTITY),
    })
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of lines) before adding a new line.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id("42").unwrap().as_str(), "42");
        assert_eq!(
            validate_product_id("550e8400-e29b-41d4-a716-446655440000")
                .unwrap()
                .as_str(),
            "550e8400-e29b-41d4-a716-446655440000"
        );

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("has space").is_err());
        assert!(validate_product_id(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).unwrap(), 1);
        assert_eq!(validate_quantity(999).unwrap(), 999);
        assert_eq!(validate_quantity(10_000).unwrap(), 10_000);
        assert_eq!(
            validate_quantity(i64::from(MAX_ITEM_QUANTITY)).unwrap(),
            MAX_ITEM_QUANTITY
        );

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(i64::from(MAX_ITEM_QUANTITY) + 1).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_err());
    }

    #[test]
    fn test_validate_line_key() {
        assert!(validate_line_key("abc").is_ok());
        assert!(validate_line_key(" ").is_err());
    }
}
