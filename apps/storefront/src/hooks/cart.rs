//! # Cart Hooks
//!
//! Add-to-cart and cart-update, with the minimum order quantity enforced.
//!
//! ## Add To Cart
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_to_cart(product_id, quantity)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate input ──► load product ──► QuantityValidator (AddToCart)      │
//! │                                             │                           │
//! │                      ┌──────────────────────┴───────────┐               │
//! │                      ▼                                  ▼               │
//! │                  Accepted                           Rejected            │
//! │                  line added / merged                notice queued       │
//! │                  session saved                      cart untouched      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cart Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update_cart_item(line_key, quantity)                                   │
//! │       │                                                                 │
//! │       ├── quantity == 0 ──► line removed (no minimum check)             │
//! │       ▼                                                                 │
//! │  QuantityValidator (CartUpdate)                                         │
//! │       │                                                                 │
//! │       ├── Accepted(q)  ──► line.qty = q                                 │
//! │       └── Corrected(m) ──► line.qty = m, notice queued                  │
//! │                                                                         │
//! │  session saved either way                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{Cart, CartLineItem, CartState, CartTotals, ConfigState, DbState, NoticeState};
use minqty_core::validation::{validate_cart_size, validate_line_key, validate_product_id, validate_quantity};
use minqty_core::{CartContext, CoreError, Product, QuantityValidator, ValidationOutcome};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Result of an add-to-cart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    /// Whether a line was created or merged.
    pub admitted: bool,
    /// Key of the line holding the product, when admitted.
    pub line_key: Option<String>,
    pub outcome: ValidationOutcome,
    pub cart: CartResponse,
}

/// Result of a cart-update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartResponse {
    /// `None` when the line was removed.
    pub outcome: Option<ValidationOutcome>,
    pub cart: CartResponse,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart hook");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart, subject to its minimum order quantity.
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Quantity requested (default: 1)
///
/// ## Returns
/// The outcome and the resulting cart. A refusal is `Ok` with
/// `admitted == false`, not an error.
pub async fn add_to_cart(
    db: &DbState,
    cart: &CartState,
    notices: &NoticeState,
    config: &ConfigState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<AddToCartResponse, ApiError> {
    let product_id = validate_product_id(product_id)?;
    let quantity = validate_quantity(quantity.unwrap_or(1))?;
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart hook");

    let db = db.inner();
    let product = db
        .products()
        .get_by_id(&product_id)
        .await?
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    if !product.is_active {
        return Err(ApiError::validation("Product is not available for sale"));
    }

    let meta = db.meta();
    let outcome = QuantityValidator::new(&meta)
        .validate(&product, quantity, CartContext::AddToCart)
        .await;

    let Some(admitted) = outcome.admitted_quantity() else {
        if let Some(notice) = outcome.notice() {
            info!(product_id = %product.id, requested = quantity, "Add to cart refused below minimum");
            notices.push(notice.clone());
        }
        return Ok(AddToCartResponse {
            admitted: false,
            line_key: None,
            outcome,
            cart: get_cart(cart),
        });
    };

    let line_key = add_line(cart, &product, admitted)?;
    persist(db, cart, config).await?;

    Ok(AddToCartResponse {
        admitted: true,
        line_key: Some(line_key),
        outcome,
        cart: get_cart(cart),
    })
}

fn add_line(cart: &CartState, product: &Product, quantity: u32) -> Result<String, ApiError> {
    cart.with_cart_mut(|c| {
        if !c.items.iter().any(|l| l.product_id == product.id) {
            validate_cart_size(c.item_count())?;
        }
        c.add_item(product, quantity)
    })
    .map_err(ApiError::from)
}

/// Changes a line's quantity, raising it to the minimum when needed.
///
/// The old quantity is not passed in. It is read from the cart line as the
/// write replaces it, and logged next to the requested and stored values.
///
/// ## Arguments
/// * `line_key` - Key of the line to change
/// * `quantity` - New quantity (0 removes the line)
pub async fn update_cart_item(
    db: &DbState,
    cart: &CartState,
    notices: &NoticeState,
    config: &ConfigState,
    line_key: &str,
    quantity: i64,
) -> Result<UpdateCartResponse, ApiError> {
    validate_line_key(line_key)?;
    debug!(line_key = %line_key, quantity = %quantity, "update_cart_item hook");

    if quantity == 0 {
        let cart_response = remove_from_cart(db, cart, config, line_key).await?;
        return Ok(UpdateCartResponse {
            outcome: None,
            cart: cart_response,
        });
    }

    let requested = validate_quantity(quantity)?;

    let line = cart
        .with_cart(|c| c.line(line_key).cloned())
        .ok_or_else(|| CoreError::CartLineNotFound(line_key.to_string()))?;

    let db = db.inner();
    let product = match db.products().get_by_id(&line.product_id).await? {
        Some(product) => product,
        // The product row is gone; keep enforcing against the line's snapshot.
        None => Product {
            id: line.product_id.clone(),
            sku: String::new(),
            name: line.name.clone(),
            is_active: false,
            created_at: line.added_at,
            updated_at: line.added_at,
        },
    };

    let meta = db.meta();
    let outcome = QuantityValidator::new(&meta)
        .validate(&product, requested, CartContext::CartUpdate)
        .await;

    let admitted = outcome.admitted_quantity().unwrap_or(requested);
    let previous = cart.with_cart_mut(|c| c.set_quantity(line_key, admitted))?;

    debug!(
        line_key = %line_key,
        previous,
        requested,
        stored = admitted,
        "Cart line quantity changed"
    );

    if let Some(notice) = outcome.notice() {
        info!(line_key = %line_key, requested, corrected = admitted, "Cart quantity raised to minimum");
        notices.push(notice.clone());
    }

    persist(db, cart, config).await?;

    Ok(UpdateCartResponse {
        outcome: Some(outcome),
        cart: get_cart(cart),
    })
}

/// Removes a line from the cart.
pub async fn remove_from_cart(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
    line_key: &str,
) -> Result<CartResponse, ApiError> {
    validate_line_key(line_key)?;
    debug!(line_key = %line_key, "remove_from_cart hook");

    cart.with_cart_mut(|c| c.remove_item(line_key))?;
    persist(db.inner(), cart, config).await?;

    Ok(get_cart(cart))
}

/// Clears all lines from the cart.
pub async fn clear_cart(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
) -> Result<CartResponse, ApiError> {
    debug!("clear_cart hook");

    cart.with_cart_mut(Cart::clear);
    persist(db.inner(), cart, config).await?;

    Ok(get_cart(cart))
}

/// Loads the configured session's cart into `cart`.
///
/// Returns whether a saved cart was found.
pub async fn restore_cart(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
) -> Result<bool, ApiError> {
    let saved: Option<Cart> = db.inner().sessions().load(&config.session_id).await?;

    match saved {
        Some(saved) => {
            info!(
                session_id = %config.session_id,
                lines = saved.item_count(),
                "Restored cart session"
            );
            cart.replace(saved);
            Ok(true)
        }
        None => Ok(false),
    }
}

async fn persist(
    db: &minqty_db::Database,
    cart: &CartState,
    config: &ConfigState,
) -> Result<(), ApiError> {
    let snapshot = cart.snapshot();
    db.sessions().save(&config.session_id, &snapshot).await?;
    Ok(())
}
