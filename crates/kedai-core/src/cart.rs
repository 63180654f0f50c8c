//! # Cart Engine
//!
//! The in-memory shopping cart.
//!
//! ## Invariants
//! - Lines are unique by `menu_id`: adding the same menu entry again merges
//!   quantities instead of appending a duplicate line
//! - Quantity is >= 1 while a line exists; dropping to 0 removes the line
//! - Insertion order of first add is preserved across quantity updates
//!
//! ## Totality
//! Every operation is synchronous and total. Removing or updating an absent
//! line is a silent no-op, never an error — the storefront treats the cart as
//! a value, not a fallible resource. Business-rule limits (stock, order
//! caps) are enforced at the API boundary, not here.
//!
//! Totals are derived live from the current lines on every call; there is no
//! cached figure to go stale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::LineItem;

/// The shopping cart: an insertion-ordered collection of [`LineItem`]s,
/// unique by `menu_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Restores a cart from previously persisted lines.
    ///
    /// Lines are trusted as stored; the snapshot was written by
    /// [`Cart::items`] and upholds the uniqueness invariant.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Cart { items }
    }

    /// Adds a line to the cart.
    ///
    /// If a line with the same `menu_id` exists its quantity increases by
    /// `item.quantity`; otherwise the line is appended.
    pub fn add_item(&mut self, item: LineItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.menu_id == item.menu_id) {
            existing.quantity += item.quantity;
            return;
        }

        self.items.push(item);
    }

    /// Removes the line for `menu_id`. No-op if absent.
    pub fn remove_item(&mut self, menu_id: &str) {
        self.items.retain(|i| i.menu_id != menu_id);
    }

    /// Replaces the quantity of the line for `menu_id`, preserving its
    /// position.
    ///
    /// A quantity <= 0 behaves as [`Cart::remove_item`]. No-op if the line
    /// is absent (no implicit insertion).
    pub fn update_quantity(&mut self, menu_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(menu_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.menu_id == menu_id) {
            item.quantity = quantity;
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Σ unit price × quantity over all lines; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Σ quantity over all lines; zero for an empty cart.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current lines, in insertion order. This is also the snapshot
    /// shape handed to the persistence shim and to order creation.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Total quantity across all lines.
    pub item_count: i64,
    /// Cart total in rupiah.
    pub total_rupiah: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            total_rupiah: cart.total().rupiah(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn wonton(quantity: i64) -> LineItem {
        LineItem::new("A", "Wonton", 15_000, quantity)
    }

    fn es_teh(quantity: i64) -> LineItem {
        LineItem::new("B", "Es Teh", 5_000, quantity)
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(wonton(2));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().rupiah(), 30_000);
    }

    #[test]
    fn test_add_same_menu_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(wonton(2));
        cart.add_item(wonton(1));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().rupiah(), 45_000);
    }

    #[test]
    fn test_repeated_adds_sum_quantities() {
        let mut cart = Cart::new();
        for qty in [1, 2, 3, 4] {
            cart.add_item(wonton(qty));
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 10);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(wonton(1));
        cart.add_item(es_teh(1));
        cart.add_item(wonton(1));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.menu_id.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);
    }

    #[test]
    fn test_update_quantity_in_place() {
        let mut cart = Cart::new();
        cart.add_item(wonton(1));
        cart.add_item(es_teh(1));

        cart.update_quantity("A", 5);

        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.items()[0].menu_id, "A");
        assert_eq!(cart.total().rupiah(), 5 * 15_000 + 5_000);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(wonton(2));
        cart.update_quantity("A", 0);
        assert!(cart.is_empty());

        cart.add_item(wonton(2));
        cart.update_quantity("A", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_and_remove_absent_are_noops() {
        let mut cart = Cart::new();
        cart.add_item(wonton(2));

        cart.update_quantity("missing", 3);
        cart.remove_item("missing");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(wonton(1));
        cart.add_item(es_teh(2));

        cart.remove_item("A");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].menu_id, "B");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(wonton(2));
        cart.add_item(es_teh(1));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total().rupiah(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_totals_never_stale() {
        let mut cart = Cart::new();
        cart.add_item(wonton(2));
        assert_eq!(cart.total().rupiah(), 30_000);

        cart.add_item(wonton(1));
        assert_eq!(cart.total().rupiah(), 45_000);
        assert_eq!(cart.item_count(), 3);

        cart.update_quantity("A", 1);
        assert_eq!(cart.total().rupiah(), 15_000);

        // Repeated reads without mutation return the same value.
        assert_eq!(cart.total(), cart.total());
        assert_eq!(cart.item_count(), cart.item_count());
    }

    #[test]
    fn test_restore_roundtrip() {
        let mut cart = Cart::new();
        cart.add_item(wonton(2));
        cart.add_item(es_teh(1));

        let restored = Cart::from_items(cart.items().to_vec());

        assert_eq!(restored.total(), cart.total());
        assert_eq!(restored.item_count(), cart.item_count());
    }
}
