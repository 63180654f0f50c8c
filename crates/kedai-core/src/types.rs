//! # Domain Types
//!
//! Core domain types used throughout Kedai.
//!
//! ## Type Overview
//! ```text
//!   MenuItem        the catalog entry customers browse
//!   LineItem        one product line in a cart or order (price frozen)
//!   OrderRecord     a submitted order with its line-item snapshot
//!   ExpenseRecord   a back-office expense entry
//!   InventoryItem   a stock-count row (ingredients, packaging, ...)
//!
//!   OrderStatus / FulfillmentType / ExpenseCategory
//!                   closed enums replacing the stringly-typed columns
//! ```
//!
//! Every entity carries a UUID v4 `id` generated at the persistence layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::message::Fulfillment;
use crate::money::Money;

// =============================================================================
// Menu
// =============================================================================

/// A menu entry available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct MenuItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on the storefront and in order messages.
    pub name: String,

    /// Price in whole rupiah.
    pub price_rupiah: i64,

    /// Menu section ("Makanan", "Minuman", ...). Free-form: the admin
    /// screen creates sections on the fly.
    pub category: String,

    /// Optional image URL (hosted externally).
    pub image: Option<String>,

    /// Optional description shown on the menu card.
    pub description: Option<String>,

    /// When the menu entry was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the menu entry was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupiah(self.price_rupiah)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product line in a cart or order.
///
/// Uses the snapshot pattern: name and price are frozen when the line is
/// created, so the cart and order history stay consistent even if the menu
/// entry is edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Menu entry this line refers to.
    pub menu_id: String,

    /// Menu name at the time the line was created (frozen).
    pub name: String,

    /// Unit price in rupiah at the time the line was created (frozen).
    pub price_rupiah: i64,

    /// Quantity ordered. Always >= 1 while the line exists in a cart.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item from raw parts.
    pub fn new(menu_id: impl Into<String>, name: impl Into<String>, price_rupiah: i64, quantity: i64) -> Self {
        LineItem {
            menu_id: menu_id.into(),
            name: name.into(),
            price_rupiah,
            quantity,
        }
    }

    /// Creates a line item from a menu entry, freezing its name and price.
    pub fn from_menu(menu: &MenuItem, quantity: i64) -> Self {
        LineItem {
            menu_id: menu.id.clone(),
            name: menu.name.clone(),
            price_rupiah: menu.price_rupiah,
            quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_rupiah(self.price_rupiah)
    }

    /// Returns unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Submitted, waiting for the kitchen to pick it up.
    Pending,
    /// Being prepared.
    Processing,
    /// Out for delivery or served at the table.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Closed out by the back office.
    Completed,
}

impl OrderStatus {
    /// Indonesian display label used by the admin screens.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Diproses",
            OrderStatus::Shipped => "Dikirim/Saji",
            OrderStatus::Delivered => "Selesai",
            OrderStatus::Completed => "Selesai",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Fulfillment Type
// =============================================================================

/// How the customer receives the order.
///
/// Determines which detail field applies: dine-in → table number,
/// delivery → address, pickup → pickup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "kebab-case"))]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentType {
    DineIn,
    Delivery,
    Pickup,
}

impl FulfillmentType {
    /// The wire spelling, also embedded in the order message ("Metode: ...").
    pub const fn as_str(&self) -> &'static str {
        match self {
            FulfillmentType::DineIn => "dine-in",
            FulfillmentType::Delivery => "delivery",
            FulfillmentType::Pickup => "pickup",
        }
    }

    /// Indonesian display label used by the checkout screen.
    pub const fn label(&self) -> &'static str {
        match self {
            FulfillmentType::DineIn => "Makan di Tempat",
            FulfillmentType::Delivery => "Pengiriman",
            FulfillmentType::Pickup => "Ambil Sendiri",
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A submitted order.
///
/// Line items are a frozen snapshot of the cart at checkout time; editing
/// the menu afterwards never rewrites order history. Only one of the three
/// detail columns is populated, matching `fulfillment_type`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRecord {
    pub id: String,

    /// Customer identity as issued by the auth provider (opaque here).
    pub user_id: String,

    /// Frozen line-item snapshot.
    pub items: Vec<LineItem>,

    /// Order total in rupiah at checkout time.
    pub total_rupiah: i64,

    pub status: OrderStatus,

    pub fulfillment_type: FulfillmentType,

    /// Table number, populated for dine-in orders.
    pub table_no: Option<String>,

    /// Delivery address, populated for delivery orders.
    pub address: Option<String>,

    /// Requested pickup time, populated for pickup orders.
    pub pickup_time: Option<String>,

    /// Delivery fee in rupiah, when one is charged.
    pub shipping_fee_rupiah: Option<i64>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_rupiah(self.total_rupiah)
    }

    /// Reconstructs the tagged fulfillment value from the flat columns.
    pub fn fulfillment(&self) -> Fulfillment {
        match self.fulfillment_type {
            FulfillmentType::DineIn => Fulfillment::DineIn {
                table_no: self.table_no.clone(),
            },
            FulfillmentType::Delivery => Fulfillment::Delivery {
                address: self.address.clone(),
            },
            FulfillmentType::Pickup => Fulfillment::Pickup {
                pickup_time: self.pickup_time.clone(),
            },
        }
    }
}

// =============================================================================
// Expenses
// =============================================================================

/// Back-office expense categories.
///
/// The Finance screen offers exactly these five; the pie chart groups by
/// them, so they are a closed set rather than free-form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum ExpenseCategory {
    /// Raw ingredients.
    #[serde(rename = "Bahan Baku")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Bahan Baku"))]
    BahanBaku,

    /// Day-to-day operations.
    #[serde(rename = "Operasional")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Operasional"))]
    Operasional,

    /// Wages.
    #[serde(rename = "Gaji")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Gaji"))]
    Gaji,

    /// Utilities (electricity, water, gas).
    #[serde(rename = "Utilitas")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Utilitas"))]
    Utilitas,

    /// Everything else.
    #[serde(rename = "Lainnya")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Lainnya"))]
    Lainnya,
}

impl ExpenseCategory {
    /// Display name, identical to the stored spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::BahanBaku => "Bahan Baku",
            ExpenseCategory::Operasional => "Operasional",
            ExpenseCategory::Gaji => "Gaji",
            ExpenseCategory::Utilitas => "Utilitas",
            ExpenseCategory::Lainnya => "Lainnya",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A back-office expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ExpenseRecord {
    pub id: String,

    /// The day the expense applies to (entered on the form, not the insert
    /// timestamp).
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Amount in whole rupiah.
    pub amount_rupiah: i64,

    pub description: String,

    pub category: ExpenseCategory,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Returns the amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_rupiah(self.amount_rupiah)
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// A stock-count row for the back office.
///
/// Stock is fractional (ingredients are weighed: 2.5 kg of flour), with a
/// free-form unit label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct InventoryItem {
    pub id: String,

    pub item_name: String,

    pub current_stock: f64,

    /// Unit label ("kg", "liter", "pcs", ...).
    pub unit: String,

    #[ts(as = "String")]
    pub last_update: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Menu {}", id),
            price_rupiah: price,
            category: "Makanan".to_string(),
            image: None,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_line_item_freezes_menu_price() {
        let mut m = menu("1", 15_000);
        let line = LineItem::from_menu(&m, 2);

        m.price_rupiah = 20_000;

        assert_eq!(line.price_rupiah, 15_000);
        assert_eq!(line.line_total().rupiah(), 30_000);
    }

    #[test]
    fn test_order_status_serde_spelling() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }

    #[test]
    fn test_fulfillment_type_serde_spelling() {
        let json = serde_json::to_string(&FulfillmentType::DineIn).unwrap();
        assert_eq!(json, "\"dine-in\"");
        assert_eq!(FulfillmentType::DineIn.as_str(), "dine-in");
    }

    #[test]
    fn test_expense_category_serde_spelling() {
        let json = serde_json::to_string(&ExpenseCategory::BahanBaku).unwrap();
        assert_eq!(json, "\"Bahan Baku\"");

        let back: ExpenseCategory = serde_json::from_str("\"Bahan Baku\"").unwrap();
        assert_eq!(back, ExpenseCategory::BahanBaku);
    }

    #[test]
    fn test_order_fulfillment_roundtrip() {
        let order = OrderRecord {
            id: "o-1".to_string(),
            user_id: "u-1".to_string(),
            items: vec![LineItem::new("1", "Wonton", 15_000, 2)],
            total_rupiah: 30_000,
            status: OrderStatus::default(),
            fulfillment_type: FulfillmentType::DineIn,
            table_no: Some("5".to_string()),
            address: None,
            pickup_time: None,
            shipping_fee_rupiah: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        match order.fulfillment() {
            Fulfillment::DineIn { table_no } => assert_eq!(table_no.as_deref(), Some("5")),
            other => panic!("unexpected fulfillment: {:?}", other),
        }
    }
}
