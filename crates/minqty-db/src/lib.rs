//! # minqty-db: Database Layer for minqty
//!
//! SQLite persistence for products, their metadata, and shopper cart
//! sessions. The metadata repository is the production
//! [`MetadataStore`](minqty_core::MetadataStore).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        minqty Data Flow                                 │
//! │                                                                         │
//! │  Storefront hook (add_to_cart, save_quick_edit, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     minqty-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ ProductRepo   │    │ 001_initial_ │  │   │
//! │  │   │ SqlitePool    │◄───│ MetaRepo      │    │   schema.sql │  │   │
//! │  │   │               │    │ SessionRepo   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (platform data dir, or MINQTY_DB_PATH)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Product, metadata and session repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use minqty_core::ConstraintResolver;
//! use minqty_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("minqty.db")).await?;
//!
//! let meta = db.meta();
//! let minimum = ConstraintResolver::new(&meta).resolve(&"42".into()).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::meta::MetaRepository;
pub use repository::product::ProductRepository;
pub use repository::session::SessionRepository;
