//! # State Module
//!
//! Storefront state, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │   DbState    │  │  CartState   │  │ NoticeState  │  │ ConfigState │ │
//! │  │              │  │              │  │              │  │             │ │
//! │  │  Database    │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  store_name │ │
//! │  │  (SQLite     │  │    Cart      │  │    Vec<      │  │  session_id │ │
//! │  │   pool)      │  │  >>          │  │    Notice>>> │  │  db path    │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘ │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • CartState, NoticeState: Arc<Mutex<T>>, never held across .await     │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hooks declare only the state they need.

mod cart;
mod config;
mod db;
mod notices;

pub use cart::{Cart, CartLineItem, CartState, CartTotals};
pub use config::ConfigState;
pub use db::DbState;
pub use notices::NoticeState;
