//! # Order Repository
//!
//! Database operations for submitted orders.
//!
//! ## Order Lifecycle
//! ```text
//!   checkout ──► create() ──► status: pending
//!   back office ──► update_status() ──► processing → shipped → delivered/completed
//! ```
//!
//! Line items are stored as a JSON snapshot in the `items` column — they are
//! frozen at checkout and never joined against the live menu.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use kedai_core::{Fulfillment, LineItem, OrderRecord, OrderStatus};

const ORDER_COLUMNS: &str = "id, user_id, items, total_rupiah, status, fulfillment_type, \
     table_no, address, pickup_time, shipping_fee_rupiah, created_at, updated_at";

/// Flat row shape; `items` is decoded from JSON into the record.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: String,
    user_id: String,
    items: String,
    total_rupiah: i64,
    status: OrderStatus,
    fulfillment_type: kedai_core::FulfillmentType,
    table_no: Option<String>,
    address: Option<String>,
    pickup_time: Option<String>,
    shipping_fee_rupiah: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_record(self) -> DbResult<OrderRecord> {
        let items: Vec<LineItem> =
            serde_json::from_str(&self.items).map_err(|e| DbError::corrupt("order items", e))?;

        Ok(OrderRecord {
            id: self.id,
            user_id: self.user_id,
            items,
            total_rupiah: self.total_rupiah,
            status: self.status,
            fulfillment_type: self.fulfillment_type,
            table_no: self.table_no,
            address: self.address,
            pickup_time: self.pickup_time,
            shipping_fee_rupiah: self.shipping_fee_rupiah,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Creates a pending order from a checkout, generating its id and
    /// timestamps. The fulfillment detail lands in the single column
    /// matching its method; the other two stay NULL.
    pub async fn create(
        &self,
        user_id: &str,
        items: Vec<LineItem>,
        total_rupiah: i64,
        fulfillment: Fulfillment,
        shipping_fee_rupiah: Option<i64>,
    ) -> DbResult<OrderRecord> {
        let now = Utc::now();
        let fulfillment_type = fulfillment.fulfillment_type();
        let (table_no, address, pickup_time) = fulfillment.into_columns();

        let order = OrderRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            items,
            total_rupiah,
            status: OrderStatus::Pending,
            fulfillment_type,
            table_no,
            address,
            pickup_time,
            shipping_fee_rupiah,
            created_at: now,
            updated_at: now,
        };

        self.insert(&order).await?;
        Ok(order)
    }

    /// Inserts a pre-built order.
    pub async fn insert(&self, order: &OrderRecord) -> DbResult<()> {
        debug!(id = %order.id, total = order.total_rupiah, "Inserting order");

        let items_json =
            serde_json::to_string(&order.items).map_err(|e| DbError::corrupt("order items", e))?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, user_id, items, total_rupiah, status, fulfillment_type,
                table_no, address, pickup_time, shipping_fee_rupiah,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(&order.id)
        .bind(&order.user_id)
        .bind(&items_json)
        .bind(order.total_rupiah)
        .bind(order.status)
        .bind(order.fulfillment_type)
        .bind(&order.table_no)
        .bind(&order.address)
        .bind(&order.pickup_time)
        .bind(order.shipping_fee_rupiah)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists all orders, newest first.
    pub async fn list(&self) -> DbResult<Vec<OrderRecord>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_record).collect()
    }

    /// Lists one customer's orders, newest first.
    pub async fn list_by_user(&self, user_id: &str) -> DbResult<Vec<OrderRecord>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = ?1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_record).collect()
    }

    /// Gets an order by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<OrderRecord>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(OrderRow::into_record).transpose()
    }

    /// Updates an order's status, stamping `updated_at`.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> DbResult<()> {
        debug!(id = %id, status = ?status, "Updating order status");

        let now = Utc::now();

        let result = sqlx::query("UPDATE orders SET status = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .bind(now)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Counts all orders.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
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
        vec![
            LineItem::new("m-1", "Wonton", 15_000, 2),
            LineItem::new("m-2", "Es Teh", 5_000, 1),
        ]
    }

    #[tokio::test]
    async fn test_create_roundtrips_items() {
        let db = db().await;
        let repo = db.orders();

        let order = repo
            .create(
                "u-1",
                items(),
                35_000,
                Fulfillment::DineIn {
                    table_no: Some("5".to_string()),
                },
                None,
            )
            .await
            .unwrap();

        let fetched = repo.get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.items, items());
        assert_eq!(fetched.total_rupiah, 35_000);
        assert_eq!(fetched.status, OrderStatus::Pending);
        assert_eq!(fetched.table_no.as_deref(), Some("5"));
        assert!(fetched.address.is_none());
        assert!(fetched.pickup_time.is_none());
    }

    #[tokio::test]
    async fn test_list_by_user() {
        let db = db().await;
        let repo = db.orders();

        repo.create("u-1", items(), 35_000, Fulfillment::Delivery { address: None }, None)
            .await
            .unwrap();
        repo.create("u-2", items(), 35_000, Fulfillment::Pickup { pickup_time: None }, None)
            .await
            .unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
        let mine = repo.list_by_user("u-1").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, "u-1");
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = db().await;
        let repo = db.orders();

        let order = repo
            .create("u-1", items(), 35_000, Fulfillment::DineIn { table_no: None }, None)
            .await
            .unwrap();

        repo.update_status(&order.id, OrderStatus::Processing)
            .await
            .unwrap();

        let fetched = repo.get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, OrderStatus::Processing);
        assert!(fetched.updated_at >= fetched.created_at);

        let err = repo
            .update_status("missing", OrderStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
