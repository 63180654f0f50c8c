//! # Menu Routes
//!
//! CRUD backend for the admin menu screen and the storefront menu listing.
//! Image handling is an external URL: upload itself is delegated to hosted
//! storage.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use kedai_core::validation::{validate_menu_name, validate_price};
use kedai_core::{CoreError, MenuItem, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Create/update payload for a menu entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuPayload {
    pub name: String,
    pub price_rupiah: i64,
    pub category: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl MenuPayload {
    fn validate(&self) -> Result<(), ApiError> {
        validate_menu_name(&self.name)?;
        validate_price(self.price_rupiah)?;

        if self.category.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "category".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// `GET /menus` — the catalog, newest first.
pub async fn list_menus(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.db.menus().list().await?))
}

/// `POST /menus` — creates a menu entry.
pub async fn create_menu(
    State(state): State<AppState>,
    Json(payload): Json<MenuPayload>,
) -> Result<Json<MenuItem>, ApiError> {
    payload.validate()?;

    let menu = state
        .db
        .menus()
        .create(
            payload.name.trim(),
            payload.price_rupiah,
            payload.category.trim(),
            payload.image,
            payload.description,
        )
        .await?;

    Ok(Json(menu))
}

/// `PUT /menus/:id` — updates a menu entry in place.
pub async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuPayload>,
) -> Result<Json<MenuItem>, ApiError> {
    payload.validate()?;

    let repo = state.db.menus();
    let existing = repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::from(CoreError::MenuNotFound(id.clone())))?;

    let updated = MenuItem {
        name: payload.name.trim().to_string(),
        price_rupiah: payload.price_rupiah,
        category: payload.category.trim().to_string(),
        image: payload.image,
        description: payload.description,
        ..existing
    };
    repo.update(&updated).await?;

    // Re-read to pick up the stamped updated_at.
    let fresh = repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::from(CoreError::MenuNotFound(id)))?;

    Ok(Json(fresh))
}

/// `DELETE /menus/:id`.
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.db.menus().delete(&id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}
