//! # minqty-core: Minimum Order Quantity Rules
//!
//! This crate decides what a product's minimum order quantity is, what happens
//! when a shopper asks for less, and how the value appears on every surface.
//! It performs no I/O of its own; storage sits behind [`MetadataStore`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        minqty Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront hooks (apps/storefront)           │   │
//! │  │   add_to_cart, update_cart_item, render_listing, save_* ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ minqty-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ resolver  │  │ validator │  │  surface  │  │   store   │  │   │
//! │  │   │  stored → │  │ accept /  │  │ widgets,  │  │  (trait)  │  │   │
//! │  │   │  minimum  │  │ reject /  │  │ fields,   │  │           │  │   │
//! │  │   │           │  │ correct   │  │ list      │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └─────┬─────┘  │   │
//! │  └───────────────────────────────────────────────────────┼─────────┘   │
//! │                                                          │              │
//! │  ┌───────────────────────────────────────────────────────▼─────────┐   │
//! │  │                    minqty-db (MetaRepository)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, Product, MinimumQuantity)
//! - [`store`] - The metadata store seam and an in-memory store
//! - [`resolver`] - Stored value → effective minimum
//! - [`validator`] - Add-to-cart and cart-update policies
//! - [`surface`] - Storefront and admin projections
//! - [`sanitize`] - Form input cleaning
//! - [`validation`] - Host input checks
//! - [`notice`] - Shopper-facing messages
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use minqty_core::validator::{check_quantity, CartContext};
//! use minqty_core::resolver::parse_minimum;
//!
//! let minimum = parse_minimum(Some("10"));
//!
//! let outcome = check_quantity("Bulk Rice", minimum, 3, CartContext::AddToCart);
//! assert_eq!(
//!     outcome.notice().map(|n| n.message.as_str()),
//!     Some("The minimum order quantity for Bulk Rice is 10.")
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod notice;
pub mod resolver;
pub mod sanitize;
pub mod store;
pub mod surface;
pub mod types;
pub mod validation;
pub mod validator;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use notice::{Notice, NoticeSeverity};
pub use resolver::ConstraintResolver;
pub use store::{MemoryMetaStore, MetadataStore};
pub use surface::SurfaceSynchronizer;
pub use types::*;
pub use validator::{CartContext, QuantityValidator, ValidationOutcome};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Metadata key under which a product's minimum is stored.
///
/// Existing stores already hold values under this key, so it never changes.
pub const MIN_QUANTITY_META_KEY: &str = "_custom_minimum_quantity";

/// Maximum lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single cart line.
///
/// Equal to the largest minimum the resolver accepts, so a line raised to
/// any stored minimum always stays within bounds.
pub const MAX_ITEM_QUANTITY: u32 = u32::MAX;
