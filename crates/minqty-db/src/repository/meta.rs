//! # Product Metadata Repository
//!
//! The SQLite-backed [`MetadataStore`].
//!
//! ## Write Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_meta(42, "_custom_minimum_quantity", "10")                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT INTO product_meta ... ON CONFLICT (product_id, meta_key)        │
//! │  DO UPDATE SET meta_value = excluded.meta_value                         │
//! │                                                                         │
//! │  One row per (product, key). The last write wins; nothing is merged.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use minqty_core::{MetadataStore, ProductId};

/// Repository for per-product key-value metadata.
#[derive(Debug, Clone)]
pub struct MetaRepository {
    pool: SqlitePool,
}

impl MetaRepository {
    /// Creates a new MetaRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MetaRepository { pool }
    }

    /// Reads one value.
    pub async fn get(&self, product_id: &ProductId, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar(
            "SELECT meta_value FROM product_meta WHERE product_id = ?1 AND meta_key = ?2",
        )
        .bind(product_id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    /// Writes one value, replacing whatever was there.
    pub async fn upsert(&self, product_id: &ProductId, key: &str, value: &str) -> DbResult<()> {
        debug!(product_id = %product_id, key = %key, "Upserting product meta");

        sqlx::query(
            r#"
            INSERT INTO product_meta (product_id, meta_key, meta_value, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (product_id, meta_key)
            DO UPDATE SET meta_value = excluded.meta_value, updated_at = excluded.updated_at
            "#,
        )
        .bind(product_id)
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

}

impl MetadataStore for MetaRepository {
    type Error = DbError;

    async fn get_meta(&self, product_id: &ProductId, key: &str) -> Result<Option<String>, DbError> {
        self.get(product_id, key).await
    }

    async fn set_meta(&self, product_id: &ProductId, key: &str, value: &str) -> Result<(), DbError> {
        self.upsert(product_id, key, value).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
