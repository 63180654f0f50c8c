//! # Order Routes
//!
//! Customer order history and the back-office status board. Realtime push
//! is out of scope; the screens poll these same rows.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use kedai_core::{OrderRecord, OrderStatus};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// Restrict to one customer's orders (the "my orders" screen).
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// `GET /orders[?user_id=]` — newest first.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    let repo = state.db.orders();

    let orders = match query.user_id {
        Some(user_id) => repo.list_by_user(&user_id).await?,
        None => repo.list().await?,
    };

    Ok(Json(orders))
}

/// `GET /orders/:id`.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderRecord>, ApiError> {
    let order = state
        .db
        .orders()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", &id))?;

    Ok(Json(order))
}

/// `PATCH /orders/:id/status` — back-office progression
/// (pending → processing → shipped → delivered/completed).
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<OrderRecord>, ApiError> {
    let repo = state.db.orders();
    repo.update_status(&id, update.status).await?;

    let order = repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", &id))?;

    Ok(Json(order))
}
