//! # Cart Snapshot Repository
//!
//! The cart persistence shim: serializes a cart's line items across process
//! restarts, scoped per session key.
//!
//! The contract is intentionally tiny — `load`, `save`, `clear` — mirroring
//! a browser's key-value cart storage. The cart engine itself never touches
//! this; the storefront's cart state writes through after each mutation.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kedai_core::LineItem;

/// Repository for cart snapshot persistence.
#[derive(Debug, Clone)]
pub struct CartSnapshotRepository {
    pool: SqlitePool,
}

impl CartSnapshotRepository {
    /// Creates a new CartSnapshotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartSnapshotRepository { pool }
    }

    /// Loads the persisted line items for a session key.
    ///
    /// A key with no snapshot yields an empty list, not an error — a fresh
    /// session simply starts with an empty cart.
    pub async fn load(&self, key: &str) -> DbResult<Vec<LineItem>> {
        let payload: Option<String> =
            sqlx::query_scalar("SELECT items FROM cart_snapshots WHERE cart_key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        match payload {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| DbError::corrupt("cart snapshot", e))
            }
            None => Ok(Vec::new()),
        }
    }

    /// Persists the line items for a session key, replacing any previous
    /// snapshot.
    pub async fn save(&self, key: &str, items: &[LineItem]) -> DbResult<()> {
        debug!(key = %key, lines = items.len(), "Saving cart snapshot");

        let json =
            serde_json::to_string(items).map_err(|e| DbError::corrupt("cart snapshot", e))?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO cart_snapshots (cart_key, items, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(cart_key) DO UPDATE SET
                items = excluded.items,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(&json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Drops the snapshot for a session key. No-op if absent.
    pub async fn clear(&self, key: &str) -> DbResult<()> {
        debug!(key = %key, "Clearing cart snapshot");

        sqlx::query("DELETE FROM cart_snapshots WHERE cart_key = ?1")
            .bind(key)
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
    use crate::pool::{Database, DbConfig};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn items() -> Vec<LineItem> {
        vec![LineItem::new("m-1", "Wonton", 15_000, 2)]
    }

    #[tokio::test]
    async fn test_missing_key_loads_empty() {
        let db = db().await;
        let repo = db.cart_snapshots();

        assert!(repo.load("fresh-session").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let db = db().await;
        let repo = db.cart_snapshots();

        repo.save("session-a", &items()).await.unwrap();
        assert_eq!(repo.load("session-a").await.unwrap(), items());

        // Replacing the snapshot, not appending.
        let updated = vec![LineItem::new("m-1", "Wonton", 15_000, 5)];
        repo.save("session-a", &updated).await.unwrap();
        assert_eq!(repo.load("session-a").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let db = db().await;
        let repo = db.cart_snapshots();

        repo.save("session-a", &items()).await.unwrap();

        assert!(repo.load("session-b").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let db = db().await;
        let repo = db.cart_snapshots();

        repo.save("session-a", &items()).await.unwrap();
        repo.clear("session-a").await.unwrap();
        assert!(repo.load("session-a").await.unwrap().is_empty());

        // Clearing an absent key is a no-op.
        repo.clear("session-b").await.unwrap();
    }
}
