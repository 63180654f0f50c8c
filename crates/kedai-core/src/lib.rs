//! # kedai-core: Pure Business Logic for Kedai
//!
//! This crate is the heart of the Kedai storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//!   Web frontend (menu, cart, checkout, admin screens)
//!        │ HTTP/JSON
//!   apps/storefront (axum handlers)
//!        │
//!   ★ kedai-core (THIS CRATE) ★
//!     types · money · cart · message · finance · validation
//!     NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS
//!        │
//!   kedai-db (SQLite persistence)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, OrderRecord, ExpenseRecord, ...)
//! - [`money`] - Money type with integer rupiah arithmetic
//! - [`cart`] - The shopping cart engine
//! - [`message`] - WhatsApp order message composer
//! - [`finance`] - Revenue/expense aggregation for the finance report
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the API boundary
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output — `now` is always a parameter
//! 2. **No I/O**: database, network and file system access are forbidden here
//! 3. **Integer Money**: all monetary values are whole rupiah (i64)
//! 4. **Closed Enums**: order status, fulfillment method and expense category
//!    are tagged variants, never free-form strings
//!
//! ## Example Usage
//!
//! ```rust
//! use kedai_core::cart::Cart;
//! use kedai_core::types::LineItem;
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineItem::new("menu-1", "Wonton", 15_000, 2));
//! assert_eq!(cart.total().rupiah(), 30_000);
//! assert_eq!(cart.total().format_rupiah(), "Rp30.000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod finance;
pub mod message;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use finance::{FinanceSummary, Period};
pub use message::{compose_order_message, Fulfillment};
pub use money::Money;
pub use types::*;
