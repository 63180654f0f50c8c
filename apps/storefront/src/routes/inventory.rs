//! # Inventory Routes
//!
//! Backend for the back-office stock-count screen. Edits and creations go
//! through the same upsert, stamping `last_update`.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use kedai_core::{InventoryItem, ValidationError};
use kedai_db::repository::inventory::generate_inventory_id;

use crate::error::ApiError;
use crate::state::AppState;

/// Inventory row payload.
#[derive(Debug, Deserialize)]
pub struct InventoryPayload {
    pub item_name: String,
    pub current_stock: f64,
    pub unit: String,
}

impl InventoryPayload {
    fn validate(&self) -> Result<(), ApiError> {
        if self.item_name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "item_name".to_string(),
            }
            .into());
        }

        if self.current_stock < 0.0 {
            return Err(ValidationError::MustBeNonNegative {
                field: "current_stock".to_string(),
            }
            .into());
        }

        if self.unit.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "unit".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// `GET /inventory` — alphabetical by name.
pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    Ok(Json(state.db.inventory().list().await?))
}

/// `POST /inventory` — creates a row with a generated id.
pub async fn create_inventory(
    State(state): State<AppState>,
    Json(payload): Json<InventoryPayload>,
) -> Result<Json<InventoryItem>, ApiError> {
    payload.validate()?;

    let item = state
        .db
        .inventory()
        .upsert(
            &generate_inventory_id(),
            payload.item_name.trim(),
            payload.current_stock,
            payload.unit.trim(),
        )
        .await?;

    Ok(Json(item))
}

/// `PUT /inventory/:id` — upserts a row by id.
pub async fn upsert_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryPayload>,
) -> Result<Json<InventoryItem>, ApiError> {
    payload.validate()?;

    let item = state
        .db
        .inventory()
        .upsert(
            &id,
            payload.item_name.trim(),
            payload.current_stock,
            payload.unit.trim(),
        )
        .await?;

    Ok(Json(item))
}

/// `DELETE /inventory/:id`.
pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.db.inventory().delete(&id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}
