//! # Checkout Route
//!
//! Turns the current cart into a pending order, composes the WhatsApp
//! message and returns the `wa.me` handoff URL. The cart is cleared only
//! after the order row is safely inserted.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use kedai_core::{compose_order_message, CoreError, Fulfillment, OrderRecord, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;
use crate::whatsapp;

/// Checkout payload. The fulfillment detail arrives tagged:
/// `{"type": "dine-in", "table_no": "5"}`.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    /// Customer identity from the auth provider (opaque here).
    pub user_id: String,

    /// Name (or email) the order message greets the admin with.
    pub customer_name: String,

    #[serde(flatten)]
    pub fulfillment: Fulfillment,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order: OrderRecord,
    /// The composed plain-text order message.
    pub message: String,
    /// Deep link the frontend opens to hand the message to WhatsApp.
    pub whatsapp_url: String,
}

/// `POST /checkout`.
pub async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    validate_fulfillment(&req.fulfillment)?;

    let (items, total) = state.cart.with_cart(|cart| (cart.items().to_vec(), cart.total()));
    if items.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let order = state
        .db
        .orders()
        .create(
            &req.user_id,
            items.clone(),
            total.rupiah(),
            req.fulfillment.clone(),
            None,
        )
        .await?;

    let message = compose_order_message(&req.customer_name, &items, total, &req.fulfillment);
    let whatsapp_url = whatsapp::order_handoff_url(&state.config.whatsapp_number, &message)
        .map_err(|e| ApiError::internal(format!("WhatsApp URL: {}", e)))?;

    state.cart.clear().await?;

    tracing::info!(order_id = %order.id, total = order.total_rupiah, "Checkout complete");

    Ok(Json(CheckoutResponse {
        order,
        message,
        whatsapp_url: whatsapp_url.to_string(),
    }))
}

/// The checkout form requires the detail matching the chosen method; the
/// composer downstream merely tolerates absence.
fn validate_fulfillment(fulfillment: &Fulfillment) -> Result<(), ApiError> {
    let missing = match fulfillment {
        Fulfillment::DineIn { table_no } if is_blank(table_no) => Some("table_no"),
        Fulfillment::Delivery { address } if is_blank(address) => Some("address"),
        Fulfillment::Pickup { pickup_time } if is_blank(pickup_time) => Some("pickup_time"),
        _ => None,
    };

    match missing {
        Some(field) => Err(ValidationError::Required {
            field: field.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::error::ErrorCode;
    use crate::routes::cart::{add_to_cart, AddToCartRequest};
    use axum::extract::State;
    use kedai_db::{Database, DbConfig};

    fn test_config() -> StoreConfig {
        StoreConfig {
            http_port: 0,
            database_path: ":memory:".to_string(),
            store_name: "Kedai Test".to_string(),
            whatsapp_number: "6281250070876".to_string(),
            cart_session_key: "test-cart".to_string(),
        }
    }

    async fn test_state() -> AppState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        AppState::new(db, test_config()).await.unwrap()
    }

    #[tokio::test]
    async fn test_checkout_creates_order_and_clears_cart() {
        let state = test_state().await;
        let menu = state
            .db
            .menus()
            .create("Wonton Kuah", 15_000, "Makanan", None, None)
            .await
            .unwrap();

        add_to_cart(
            State(state.clone()),
            Json(AddToCartRequest {
                menu_id: menu.id.clone(),
                quantity: Some(2),
            }),
        )
        .await
        .unwrap();

        let response = checkout(
            State(state.clone()),
            Json(CheckoutRequest {
                user_id: "u-1".to_string(),
                customer_name: "Budi".to_string(),
                fulfillment: Fulfillment::DineIn {
                    table_no: Some("5".to_string()),
                },
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(response.order.total_rupiah, 30_000);
        assert!(response.message.contains("2 Wonton Kuah (Rp15.000)"));
        assert!(response.message.contains("Nomor Meja: 5"));
        assert!(response
            .whatsapp_url
            .starts_with("https://wa.me/6281250070876?text="));

        // Order row persisted, cart emptied.
        let orders = state.db.orders().list().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].table_no.as_deref(), Some("5"));
        assert!(state.cart.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_is_rejected() {
        let state = test_state().await;

        let err = checkout(
            State(state),
            Json(CheckoutRequest {
                user_id: "u-1".to_string(),
                customer_name: "Budi".to_string(),
                fulfillment: Fulfillment::Pickup {
                    pickup_time: Some("2026-08-06T12:30".to_string()),
                },
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_validate_fulfillment() {
        assert!(validate_fulfillment(&Fulfillment::DineIn {
            table_no: Some("5".to_string())
        })
        .is_ok());

        assert!(validate_fulfillment(&Fulfillment::DineIn { table_no: None }).is_err());
        assert!(validate_fulfillment(&Fulfillment::Delivery {
            address: Some("   ".to_string())
        })
        .is_err());
        assert!(validate_fulfillment(&Fulfillment::Pickup {
            pickup_time: Some("2026-08-06T12:30".to_string())
        })
        .is_ok());
    }

    #[test]
    fn test_checkout_request_payload_shape() {
        let req: CheckoutRequest = serde_json::from_str(
            r#"{
                "user_id": "u-1",
                "customer_name": "Budi",
                "type": "delivery",
                "address": "Jl. Melati No. 3"
            }"#,
        )
        .unwrap();

        assert_eq!(
            req.fulfillment,
            Fulfillment::Delivery {
                address: Some("Jl. Melati No. 3".to_string())
            }
        );
    }
}
