//! # Expense Repository
//!
//! Database operations for back-office expense entries.

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use kedai_core::{ExpenseCategory, ExpenseRecord};

const EXPENSE_COLUMNS: &str = "id, date, amount_rupiah, description, category, created_at";

/// Repository for expense database operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: SqlitePool,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ExpenseRepository { pool }
    }

    /// Lists all expenses, most recent date first.
    pub async fn list(&self) -> DbResult<Vec<ExpenseRecord>> {
        let expenses = sqlx::query_as::<_, ExpenseRecord>(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses ORDER BY date DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Lists the most recent expenses (the back-office table shows the
    /// latest few).
    pub async fn recent(&self, limit: u32) -> DbResult<Vec<ExpenseRecord>> {
        let expenses = sqlx::query_as::<_, ExpenseRecord>(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses ORDER BY date DESC LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Creates an expense entry, generating its id and insert timestamp.
    pub async fn create(
        &self,
        date: NaiveDate,
        amount_rupiah: i64,
        description: &str,
        category: ExpenseCategory,
    ) -> DbResult<ExpenseRecord> {
        let expense = ExpenseRecord {
            id: Uuid::new_v4().to_string(),
            date,
            amount_rupiah,
            description: description.to_string(),
            category,
            created_at: Utc::now(),
        };

        self.insert(&expense).await?;
        Ok(expense)
    }

    /// Inserts a pre-built expense entry.
    pub async fn insert(&self, expense: &ExpenseRecord) -> DbResult<()> {
        debug!(id = %expense.id, amount = expense.amount_rupiah, "Inserting expense");

        sqlx::query(
            r#"
            INSERT INTO expenses (id, date, amount_rupiah, description, category, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&expense.id)
        .bind(expense.date)
        .bind(expense.amount_rupiah)
        .bind(&expense.description)
        .bind(expense.category)
        .bind(expense.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes an expense entry.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting expense");

        let result = sqlx::query("DELETE FROM expenses WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Expense", id));
        }

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

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_ordering() {
        let db = db().await;
        let repo = db.expenses();

        repo.create(day(2026, 8, 1), 40_000, "Tepung", ExpenseCategory::BahanBaku)
            .await
            .unwrap();
        repo.create(day(2026, 8, 5), 120_000, "Listrik", ExpenseCategory::Utilitas)
            .await
            .unwrap();

        let expenses = repo.list().await.unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].date, day(2026, 8, 5));
        assert_eq!(expenses[0].category, ExpenseCategory::Utilitas);

        let recent = repo.recent(1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].description, "Listrik");
    }

    #[tokio::test]
    async fn test_delete() {
        let db = db().await;
        let repo = db.expenses();

        let expense = repo
            .create(day(2026, 8, 1), 40_000, "Tepung", ExpenseCategory::BahanBaku)
            .await
            .unwrap();

        repo.delete(&expense.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        let err = repo.delete(&expense.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
