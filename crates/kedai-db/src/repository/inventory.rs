//! # Inventory Repository
//!
//! Database operations for the back-office stock counts.
//!
//! The admin screen edits rows in place and creates new ones through the
//! same form, so writes go through a single upsert.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use kedai_core::InventoryItem;

const INVENTORY_COLUMNS: &str = "id, item_name, current_stock, unit, last_update";

/// Repository for inventory database operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Lists all inventory rows, alphabetical by name.
    pub async fn list(&self) -> DbResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM inventory ORDER BY item_name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Gets an inventory row by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM inventory WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts or updates a row by id, stamping `last_update`.
    pub async fn upsert(
        &self,
        id: &str,
        item_name: &str,
        current_stock: f64,
        unit: &str,
    ) -> DbResult<InventoryItem> {
        debug!(id = %id, item_name = %item_name, stock = current_stock, "Upserting inventory");

        let item = InventoryItem {
            id: id.to_string(),
            item_name: item_name.to_string(),
            current_stock,
            unit: unit.to_string(),
            last_update: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO inventory (id, item_name, current_stock, unit, last_update)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                item_name = excluded.item_name,
                current_stock = excluded.current_stock,
                unit = excluded.unit,
                last_update = excluded.last_update
            "#,
        )
        .bind(&item.id)
        .bind(&item.item_name)
        .bind(item.current_stock)
        .bind(&item.unit)
        .bind(item.last_update)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    /// Deletes an inventory row.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting inventory item");

        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Inventory item", id));
        }

        Ok(())
    }
}

/// Helper to generate a new inventory row ID.
pub fn generate_inventory_id() -> String {
    Uuid::new_v4().to_string()
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

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let db = db().await;
        let repo = db.inventory();

        let id = generate_inventory_id();
        repo.upsert(&id, "Tepung Terigu", 10.0, "kg").await.unwrap();

        let first = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(first.current_stock, 10.0);

        repo.upsert(&id, "Tepung Terigu", 7.5, "kg").await.unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].current_stock, 7.5);
        assert!(items[0].last_update >= first.last_update);
    }

    #[tokio::test]
    async fn test_list_is_alphabetical() {
        let db = db().await;
        let repo = db.inventory();

        repo.upsert(&generate_inventory_id(), "Minyak Goreng", 5.0, "liter")
            .await
            .unwrap();
        repo.upsert(&generate_inventory_id(), "Bawang Merah", 2.0, "kg")
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.item_name)
            .collect();
        assert_eq!(names, ["Bawang Merah", "Minyak Goreng"]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = db().await;
        let repo = db.inventory();

        let err = repo.delete("missing").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
