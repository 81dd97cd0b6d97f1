//! # Hooks Module
//!
//! Every entry point the host calls into.
//!
//! ## Hook Organization
//! ```text
//! hooks/
//! ├── mod.rs      ◄─── You are here (exports, notices, config)
//! ├── cart.rs     ◄─── Add to cart, cart update, remove, clear, restore
//! ├── product.rs  ◄─── Quantity widget and summary line
//! └── admin.rs    ◄─── Edit fields, saves, list column
//! ```
//!
//! ## State Injection
//! Each hook declares only the state it needs:
//! ```rust,ignore
//! // Only needs database
//! async fn product_summary(db: &DbState, product_id: &str)
//!
//! // Only needs cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs everything a cart write touches
//! async fn add_to_cart(db: &DbState, cart: &CartState, notices: &NoticeState, config: &ConfigState, ..)
//! ```

pub mod admin;
pub mod cart;
pub mod product;

use tracing::debug;

use crate::state::{ConfigState, NoticeState};
use minqty_core::Notice;

/// Takes every queued notice for display.
pub fn take_notices(notices: &NoticeState) -> Vec<Notice> {
    let drained = notices.drain();
    debug!(count = drained.len(), "take_notices hook");
    drained
}

/// Gets the current configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    config.clone()
}
