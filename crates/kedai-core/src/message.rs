//! # Order Message Composer
//!
//! Builds the plain-text order summary that checkout hands to WhatsApp.
//!
//! The composer produces text only; URL-encoding and the `wa.me` deep link
//! are the app layer's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{FulfillmentType, LineItem};

// =============================================================================
// Fulfillment
// =============================================================================

/// Fulfillment method together with its method-specific detail.
///
/// The tagged representation makes the composer's detail branch exhaustive:
/// a new method cannot be added without deciding what its detail line is.
/// Details are optional — checkout validates presence, the composer simply
/// omits the line when the value is absent.
///
/// Serialized as `{"type": "dine-in", "table_no": "5"}` etc., matching the
/// checkout form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[ts(export)]
pub enum Fulfillment {
    DineIn { table_no: Option<String> },
    Delivery { address: Option<String> },
    Pickup { pickup_time: Option<String> },
}

impl Fulfillment {
    /// The flat method tag for storage and display.
    pub const fn fulfillment_type(&self) -> FulfillmentType {
        match self {
            Fulfillment::DineIn { .. } => FulfillmentType::DineIn,
            Fulfillment::Delivery { .. } => FulfillmentType::Delivery,
            Fulfillment::Pickup { .. } => FulfillmentType::Pickup,
        }
    }

    /// Splits into the three flat detail columns: (table_no, address,
    /// pickup_time). Only the column matching the method is populated.
    pub fn into_columns(self) -> (Option<String>, Option<String>, Option<String>) {
        match self {
            Fulfillment::DineIn { table_no } => (table_no, None, None),
            Fulfillment::Delivery { address } => (None, address, None),
            Fulfillment::Pickup { pickup_time } => (None, None, pickup_time),
        }
    }
}

// =============================================================================
// Composer
// =============================================================================

/// Composes the WhatsApp order message.
///
/// Output shape:
///
/// ```text
/// Halo Admin, saya Budi.
///
/// Order: 2 Wonton (Rp15.000), 1 Es Teh (Rp5.000)
///
/// Total: Rp35.000
/// Metode: dine-in
/// Nomor Meja: 5
/// ```
///
/// Each line renders as `"{quantity} {name} ({unit price})"`, comma-joined.
/// The detail line is selected by the fulfillment method and omitted when
/// its value is absent.
pub fn compose_order_message(
    customer_name: &str,
    items: &[LineItem],
    total: Money,
    fulfillment: &Fulfillment,
) -> String {
    let order_items = items
        .iter()
        .map(|item| format!("{} {} ({})", item.quantity, item.name, item.unit_price()))
        .collect::<Vec<_>>()
        .join(", ");

    let method = fulfillment.fulfillment_type().as_str();

    let mut message = format!(
        "Halo Admin, saya {}.\n\nOrder: {}\n\nTotal: {}\nMetode: {}",
        customer_name, order_items, total, method
    );

    match fulfillment {
        Fulfillment::Delivery { address: Some(address) } => {
            message.push_str(&format!("\nAlamat: {}", address));
        }
        Fulfillment::DineIn { table_no: Some(table_no) } => {
            message.push_str(&format!("\nNomor Meja: {}", table_no));
        }
        Fulfillment::Pickup { pickup_time: Some(pickup_time) } => {
            message.push_str(&format!("\nWaktu Pickup: {}", pickup_time));
        }
        _ => {}
    }

    message
}

// =============================================================================
// Unit Tests
// =============================================================================
