//! # Routes Module
//!
//! One module per screen's backend. Handlers stay thin: validate, call a
//! repository or core function, map errors.

pub mod cart;
pub mod checkout;
pub mod expenses;
pub mod finance;
pub mod inventory;
pub mod menu;
pub mod orders;

use axum::extract::State;
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Builds the full route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Storefront
        .route("/menus", get(menu::list_menus).post(menu::create_menu))
        .route("/menus/:id", put(menu::update_menu).delete(menu::delete_menu))
        .route("/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/cart/items", post(cart::add_to_cart))
        .route(
            "/cart/items/:menu_id",
            put(cart::update_cart_item).delete(cart::remove_from_cart),
        )
        .route("/checkout", post(checkout::checkout))
        // Orders (customer history + back office)
        .route("/orders", get(orders::list_orders))
        .route("/orders/:id", get(orders::get_order))
        .route("/orders/:id/status", patch(orders::update_order_status))
        // Back office
        .route(
            "/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route("/expenses/:id", delete(expenses::delete_expense))
        .route(
            "/inventory",
            get(inventory::list_inventory).post(inventory::create_inventory),
        )
        .route(
            "/inventory/:id",
            put(inventory::upsert_inventory).delete(inventory::delete_inventory),
        )
        .route("/finance/summary", get(finance::finance_summary))
        .with_state(state)
}

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub store: String,
    pub database: bool,
}

/// Liveness/readiness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        store: state.config.store_name.clone(),
        database: state.db.health_check().await,
    })
}
