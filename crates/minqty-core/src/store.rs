//! # Metadata Store
//!
//! The one seam between the constraint engine and host persistence.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  (product_id, key) ──► Option<String>                                   │
//! │                                                                         │
//! │  get_meta   read the raw value; None when never written                 │
//! │  set_meta   overwrite the raw value (last write wins)                   │
//! │                                                                         │
//! │  Implementations:                                                       │
//! │  • MemoryMetaStore (this file)   tests, embedding                       │
//! │  • MetaRepository (minqty-db)    SQLite upsert                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store keeps raw strings. Interpreting them is the resolver's job, so a
//! store never rejects a value for being a bad minimum.

use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::sync::RwLock;

use crate::types::ProductId;

/// Key-value metadata attached to products.
pub trait MetadataStore: Send + Sync {
    /// Error raised by the backing storage.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the raw value stored under `key` for `product_id`.
    fn get_meta(
        &self,
        product_id: &ProductId,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;

    /// Writes `value` under `key` for `product_id`, replacing any previous value.
    fn set_meta(
        &self,
        product_id: &ProductId,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// In-process metadata store.
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    entries: RwLock<HashMap<(ProductId, String), String>>,
}

impl MemoryMetaStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value without going through the async interface.
    pub fn with_value(self, product_id: impl Into<ProductId>, key: &str, value: &str) -> Self {
        self.insert(product_id.into(), key, value);
        self
    }

    fn insert(&self, product_id: ProductId, key: &str, value: &str) {
        // Poisoning leaves the map intact.
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert((product_id, key.to_string()), value.to_string());
    }

    fn lookup(&self, product_id: &ProductId, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&(product_id.clone(), key.to_string()))
            .cloned()
    }
}

impl MetadataStore for MemoryMetaStore {
    type Error = Infallible;

    async fn get_meta(&self, product_id: &ProductId, key: &str) -> Result<Option<String>, Infallible> {
        Ok(self.lookup(product_id, key))
    }

    async fn set_meta(&self, product_id: &ProductId, key: &str, value: &str) -> Result<(), Infallible> {
        self.insert(product_id.clone(), key, value);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
