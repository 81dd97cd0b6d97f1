//! # Cart Session Repository
//!
//! Persists each shopper's cart as one JSON payload.
//!
//! ## Persistence Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request start ──► load(session_id) ──► Cart (or empty)                 │
//! │                                                                         │
//! │  add / update / correct / remove                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save(session_id, &cart) ──► cart_sessions.payload (serde_json)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository does not know the cart's shape. Anything `Serialize` can
//! be stored.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const ENTITY: &str = "Cart session";

/// Repository for serialized cart sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Creates a new SessionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SessionRepository { pool }
    }

    /// Loads and decodes a session payload.
    ///
    /// ## Returns
    /// * `Ok(None)` - No session saved under this id
    /// * `Err(DbError::CorruptPayload)` - Stored JSON doesn't decode as `T`
    pub async fn load<T: DeserializeOwned>(&self, session_id: &str) -> DbResult<Option<T>> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM cart_sessions WHERE session_id = ?1")
                .bind(session_id)
                .fetch_optional(&self.pool)
                .await?;

        payload
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| DbError::corrupt(ENTITY, session_id, e))
            })
            .transpose()
    }

    /// Encodes and stores a session payload, replacing any previous one.
    pub async fn save<T: Serialize>(&self, session_id: &str, value: &T) -> DbResult<()> {
        let payload =
            serde_json::to_string(value).map_err(|e| DbError::corrupt(ENTITY, session_id, e))?;

        debug!(session_id = %session_id, bytes = payload.len(), "Saving cart session");

        sqlx::query(
            r#"
            INSERT INTO cart_sessions (session_id, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (session_id)
            DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at
            "#,
        )
        .bind(session_id)
        .bind(&payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Basket {
        lines: Vec<(String, u32)>,
    }

    async fn setup() -> (Database, SessionRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sessions();
        (db, repo)
    }

    #[tokio::test]
    async fn test_missing_session_is_none() {
        let (_db, repo) = setup().await;
        let loaded: Option<Basket> = repo.load("nobody").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let (_db, repo) = setup().await;

        let first = Basket {
            lines: vec![("a".to_string(), 3)],
        };
        let second = Basket {
            lines: vec![("a".to_string(), 10)],
        };
        repo.save("s1", &first).await.unwrap();
        repo.save("s1", &second).await.unwrap();

        let loaded: Basket = repo.load("s1").await.unwrap().unwrap();
        assert_eq!(loaded, second);
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_reported() {
        let (db, repo) = setup().await;
        sqlx::query("INSERT INTO cart_sessions (session_id, payload, updated_at) VALUES ('s1', 'not json', '2024-01-01T00:00:00Z')")
            .execute(db.pool())
            .await
            .unwrap();

        let err = repo.load::<Basket>("s1").await.unwrap_err();
        assert!(matches!(err, DbError::CorruptPayload { .. }));
    }
}
