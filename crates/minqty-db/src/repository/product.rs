//! # Product Repository
//!
//! Database operations for products.
//!
//! The engine only needs a product's name (for notices) and the list of
//! active products (for the admin listing), so that is what this covers.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use minqty_core::{Product, ProductId};

const PRODUCT_COLUMNS: &str = "id, sku, name, is_active, created_at, updated_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo.get_by_id(&"42".into()).await?;
/// let page = repo.list_active(50).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &ProductId) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE id = ?1", PRODUCT_COLUMNS);

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Lists active products sorted by name.
    ///
    /// This is the row set of the admin product listing.
    pub async fn list_active(&self, limit: u32) -> DbResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE is_active = 1 ORDER BY name LIMIT ?1",
            PRODUCT_COLUMNS
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed active products");
        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The inserted product
    /// * `Err(DbError::UniqueViolation)` - ID or SKU already exists
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        debug!(sku = %product.sku, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, sku, name, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&product.id)
        .bind(&product.sku)
        .bind(&product.name)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(product.clone())
    }

    /// Counts active products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Generates a new product ID.
pub fn generate_product_id() -> ProductId {
    ProductId::new(Uuid::new_v4().to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig, DbError};

    fn product(id: &str, sku: &str, name: &str) -> Product {
        let now = Utc::now();
        Product {
            id: ProductId::from(id),
            sku: sku.to_string(),
            name: name.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo().await;
        repo.insert(&product("42", "RICE-25", "Bulk Rice")).await.unwrap();

        let found = repo.get_by_id(&"42".into()).await.unwrap().unwrap();
        assert_eq!(found.name, "Bulk Rice");
        assert!(found.is_active);

        assert!(repo.get_by_id(&"43".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected() {
        let repo = repo().await;
        repo.insert(&product("1", "SKU-1", "A")).await.unwrap();

        let err = repo.insert(&product("2", "SKU-1", "B")).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_active_skips_inactive() {
        let repo = repo().await;
        repo.insert(&product("1", "SKU-1", "Beta")).await.unwrap();
        repo.insert(&product("2", "SKU-2", "Alpha")).await.unwrap();
        repo.insert(&Product {
            is_active: false,
            ..product("3", "SKU-3", "Gamma")
        })
        .await
        .unwrap();

        let names: Vec<_> = repo
            .list_active(10)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
