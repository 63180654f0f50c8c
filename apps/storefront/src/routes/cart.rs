//! # Cart Routes
//!
//! Backend for the cart drawer: every mutation returns the full cart with
//! fresh totals, and writes through to the snapshot store.
//!
//! Adding fetches the live menu row and freezes its name and price into the
//! line; later menu edits never change what's already in a cart.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use kedai_core::cart::{Cart, CartTotals};
use kedai_core::validation::validate_quantity;
use kedai_core::{CoreError, LineItem};

use crate::error::ApiError;
use crate::state::AppState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Add-to-cart payload. Quantity defaults to 1 (tapping a menu card).
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub menu_id: String,
    pub quantity: Option<i64>,
}

/// Quantity payload for updating a line.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// `GET /cart` — current lines and totals.
pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    Json(state.cart.with_cart(|cart| CartResponse::from(cart)))
}

/// `POST /cart/items` — adds a menu entry to the cart (merging quantities
/// when it's already there).
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let quantity = req.quantity.unwrap_or(1);
    validate_quantity(quantity)?;

    let menu = state
        .db
        .menus()
        .get_by_id(&req.menu_id)
        .await?
        .ok_or_else(|| ApiError::from(CoreError::MenuNotFound(req.menu_id.clone())))?;

    let response = state
        .cart
        .mutate(|cart| {
            cart.add_item(LineItem::from_menu(&menu, quantity));
            CartResponse::from(&*cart)
        })
        .await?;

    Ok(Json(response))
}

/// `PUT /cart/items/:menu_id` — replaces a line's quantity; `<= 0` removes
/// the line. Updating an absent line is a no-op, mirroring the cart engine.
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let response = state
        .cart
        .mutate(|cart| {
            cart.update_quantity(&menu_id, req.quantity);
            CartResponse::from(&*cart)
        })
        .await?;

    Ok(Json(response))
}

/// `DELETE /cart/items/:menu_id` — removes a line. No-op if absent.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let response = state
        .cart
        .mutate(|cart| {
            cart.remove_item(&menu_id);
            CartResponse::from(&*cart)
        })
        .await?;

    Ok(Json(response))
}

/// `DELETE /cart` — empties the cart and drops the snapshot.
pub async fn clear_cart(State(state): State<AppState>) -> Result<Json<CartResponse>, ApiError> {
    state.cart.clear().await?;
    Ok(Json(state.cart.with_cart(|cart| CartResponse::from(cart))))
}

// =============================================================================
// Unit Tests
// =============================================================================
