//! # Expense Routes
//!
//! Backend for the back-office expense entry form and the recent-expenses
//! table on the finance screen.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use kedai_core::validation::{validate_description, validate_expense_amount};
use kedai_core::{ExpenseCategory, ExpenseRecord};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExpensesQuery {
    /// Cap the listing (the finance screen shows the latest few).
    pub limit: Option<u32>,
}

/// Expense entry payload.
#[derive(Debug, Deserialize)]
pub struct ExpensePayload {
    /// The day the expense applies to, `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub amount_rupiah: i64,
    pub description: String,
    pub category: ExpenseCategory,
}

/// `GET /expenses[?limit=]` — most recent date first.
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Json<Vec<ExpenseRecord>>, ApiError> {
    let repo = state.db.expenses();

    let expenses = match query.limit {
        Some(limit) => repo.recent(limit).await?,
        None => repo.list().await?,
    };

    Ok(Json(expenses))
}

/// `POST /expenses`.
pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<ExpenseRecord>, ApiError> {
    validate_expense_amount(payload.amount_rupiah)?;
    validate_description(&payload.description)?;

    let expense = state
        .db
        .expenses()
        .create(
            payload.date,
            payload.amount_rupiah,
            payload.description.trim(),
            payload.category,
        )
        .await?;

    Ok(Json(expense))
}

/// `DELETE /expenses/:id`.
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.db.expenses().delete(&id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}
