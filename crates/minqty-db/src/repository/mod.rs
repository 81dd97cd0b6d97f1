//! # Repository Module
//!
//! Database repository implementations for minqty.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront hook                                                       │
//! │       │                                                                 │
//! │       │  db.meta().get(&id, MIN_QUANTITY_META_KEY)                     │
//! │       ▼                                                                 │
//! │  MetaRepository ──── also usable as `impl MetadataStore`               │
//! │  ProductRepository                                                     │
//! │  SessionRepository                                                     │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product lookups and listing
//! - [`MetaRepository`](meta::MetaRepository) - Per-product key-value metadata
//! - [`SessionRepository`](session::SessionRepository) - Serialized cart sessions

pub mod meta;
pub mod product;
pub mod session;
