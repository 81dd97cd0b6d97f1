//! # Cart State
//!
//! The shopper's cart and its line items.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`. Hooks take the lock, mutate, copy
//! out what they need and release it before any `.await`.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shopper Action           Hook                    Cart State Change     │
//! │  ──────────────           ────                    ─────────────────     │
//! │                                                                         │
//! │  Add to cart ────────────► add_to_cart() ───────► new line / merge     │
//! │                            (only when admitted)                         │
//! │                                                                         │
//! │  Change quantity ────────► update_cart_item() ──► line.qty = admitted  │
//! │                            (raised to minimum)                          │
//! │                                                                         │
//! │  Remove ─────────────────► remove_from_cart() ──► line removed         │
//! │                                                                         │
//! │  Every change is followed by a session save (SessionRepository).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use minqty_core::{CoreError, CoreResult, Product, ProductId, MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// A line in the shopping cart.
///
/// The name is a snapshot taken when the line was created, so the cart
/// still reads correctly if the product is later renamed or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Opaque line key (UUID v4).
    pub key: String,

    /// Product this line is for.
    pub product_id: ProductId,

    /// Product name at time of adding.
    pub name: String,

    /// Quantity in cart, always > 0.
    pub quantity: u32,

    /// When this line was created.
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Creates a new line for `product`.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        CartLineItem {
            key: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - One line per product (adding the same product again merges)
/// - Line quantities are > 0 and at most `MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartLineItem>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` of `product`, merging into an existing line.
    ///
    /// Returns the key of the line that now holds the product.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> CoreResult<String> {
        if let Some(line) = self.items.iter_mut().find(|l| l.product_id == product.id) {
            let merged = u64::from(line.quantity) + u64::from(quantity);
            if merged > u64::from(MAX_ITEM_QUANTITY) {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            // Bounded by MAX_ITEM_QUANTITY above.
            line.quantity = merged as u32;
            return Ok(line.key.clone());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        let line = CartLineItem::from_product(product, quantity);
        let key = line.key.clone();
        self.items.push(line);
        Ok(key)
    }

    /// Looks up a line by key.
    pub fn line(&self, key: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|l| l.key == key)
    }

    /// Sets a line's quantity, returning the previous one.
    pub fn set_quantity(&mut self, key: &str, quantity: u32) -> CoreResult<u32> {
        let line = self
            .items
            .iter_mut()
            .find(|l| l.key == key)
            .ok_or_else(|| CoreError::CartLineNotFound(key.to_string()))?;

        Ok(std::mem::replace(&mut line.quantity, quantity))
    }

    /// Removes a line by key.
    pub fn remove_item(&mut self, key: &str) -> CoreResult<CartLineItem> {
        let index = self
            .items
            .iter()
            .position(|l| l.key == key)
            .ok_or_else(|| CoreError::CartLineNotFound(key.to_string()))?;

        Ok(self.items.remove(index))
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for hook responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Shared cart state.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Copies the cart out, for persisting without holding the lock.
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }

    /// Replaces the whole cart (session restore).
    pub fn replace(&self, cart: Cart) {
        self.with_cart_mut(|c| *c = cart);
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
