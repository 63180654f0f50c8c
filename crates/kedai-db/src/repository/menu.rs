//! # Menu Repository
//!
//! Database operations for the menu catalog.
//!
//! Deletion is a hard delete: order rows carry their own frozen line-item
//! snapshots, so history survives a removed menu entry.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use kedai_core::MenuItem;

const MENU_COLUMNS: &str =
    "id, name, price_rupiah, category, image, description, created_at, updated_at";

/// Repository for menu database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Lists all menu entries, newest first.
    pub async fn list(&self) -> DbResult<Vec<MenuItem>> {
        let menus = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(menus)
    }

    /// Gets a menu entry by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MenuItem>> {
        let menu = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(menu)
    }

    /// Creates a menu entry, generating its id and timestamps.
    pub async fn create(
        &self,
        name: &str,
        price_rupiah: i64,
        category: &str,
        image: Option<String>,
        description: Option<String>,
    ) -> DbResult<MenuItem> {
        let now = Utc::now();
        let menu = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price_rupiah,
            category: category.to_string(),
            image,
            description,
            created_at: now,
            updated_at: now,
        };

        self.insert(&menu).await?;
        Ok(menu)
    }

    /// Inserts a pre-built menu entry.
    pub async fn insert(&self, menu: &MenuItem) -> DbResult<()> {
        debug!(id = %menu.id, name = %menu.name, "Inserting menu item");

        sqlx::query(
            r#"
            INSERT INTO menus (
                id, name, price_rupiah, category, image, description,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&menu.id)
        .bind(&menu.name)
        .bind(menu.price_rupiah)
        .bind(&menu.category)
        .bind(&menu.image)
        .bind(&menu.description)
        .bind(menu.created_at)
        .bind(menu.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing menu entry, stamping `updated_at`.
    pub async fn update(&self, menu: &MenuItem) -> DbResult<()> {
        debug!(id = %menu.id, "Updating menu item");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE menus SET
                name = ?2,
                price_rupiah = ?3,
                category = ?4,
                image = ?5,
                description = ?6,
                updated_at = ?7
            WHERE id = ?1
            "#,
        )
        .bind(&menu.id)
        .bind(&menu.name)
        .bind(menu.price_rupiah)
        .bind(&menu.category)
        .bind(&menu.image)
        .bind(&menu.description)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Menu item", &menu.id));
        }

        Ok(())
    }

    /// Deletes a menu entry.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting menu item");

        let result = sqlx::query("DELETE FROM menus WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Menu item", id));
        }

        Ok(())
    }

    /// Counts menu entries (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menus")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
