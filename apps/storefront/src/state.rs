//! # Application State
//!
//! Shared state for the axum handlers.
//!
//! ## Why Multiple State Types?
//! The database handle, the cart session and the configuration have
//! different lifecycles and locking needs, so they stay separate fields on
//! [`AppState`] rather than one mutex over everything:
//!
//! - `Database`: internally pooled, thread-safe, no extra locking
//! - `CartState`: `Arc<Mutex<Cart>>` for exclusive access, write-through to
//!   the snapshot store
//! - `StoreConfig`: read-only after startup

use std::sync::{Arc, Mutex};

use kedai_core::cart::Cart;
use kedai_db::{CartSnapshotRepository, Database, DbResult};

use crate::config::StoreConfig;

// =============================================================================
// App State
// =============================================================================

/// State handed to every handler via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cart: CartState,
    pub config: Arc<StoreConfig>,
}

impl AppState {
    /// Builds the app state and restores the persisted cart session.
    pub async fn new(db: Database, config: StoreConfig) -> DbResult<Self> {
        let cart = CartState::new(db.cart_snapshots(), &config.cart_session_key);
        cart.restore().await?;

        Ok(AppState {
            db,
            cart,
            config: Arc::new(config),
        })
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The live cart session.
///
/// ## Persistence
/// Every mutation writes the cart's lines through to the snapshot store
/// under the session key, so the cart survives process restarts — the
/// server-side equivalent of the browser's persisted cart storage.
///
/// ## Thread Safety
/// The cart itself is guarded by a `Mutex`; the snapshot write happens
/// after the guard is released, so the lock is never held across an await.
#[derive(Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    store: CartSnapshotRepository,
    key: String,
}

impl CartState {
    /// Creates a cart session bound to a snapshot store and session key.
    ///
    /// Sessions with distinct keys are fully isolated, which is also what
    /// keeps tests independent.
    pub fn new(store: CartSnapshotRepository, key: impl Into<String>) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            store,
            key: key.into(),
        }
    }

    /// Loads the persisted snapshot into the in-memory cart.
    pub async fn restore(&self) -> DbResult<()> {
        let items = self.store.load(&self.key).await?;

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        *cart = Cart::from_items(items);
        Ok(())
    }

    /// Executes a closure with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a closure with write access to the cart, then persists the
    /// resulting lines to the snapshot store.
    pub async fn mutate<F, R>(&self, f: F) -> DbResult<R>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let (result, items) = {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            let result = f(&mut cart);
            (result, cart.items().to_vec())
        };

        self.store.save(&self.key, &items).await?;
        Ok(result)
    }

    /// Empties the cart and drops the persisted snapshot (checkout, reset).
    pub async fn clear(&self) -> DbResult<()> {
        {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            cart.clear();
        }

        self.store.clear(&self.key).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kedai_core::types::LineItem;
    use kedai_db::DbConfig;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn wonton(quantity: i64) -> LineItem {
        LineItem::new("m-1", "Wonton", 15_000, quantity)
    }

    #[tokio::test]
    async fn test_mutations_write_through() {
        let db = db().await;
        let session = CartState::new(db.cart_snapshots(), "session-a");

        session.mutate(|c| c.add_item(wonton(2))).await.unwrap();

        // A second session over the same key sees the persisted lines.
        let rejoined = CartState::new(db.cart_snapshots(), "session-a");
        rejoined.restore().await.unwrap();
        assert_eq!(rejoined.with_cart(|c| c.item_count()), 2);
        assert_eq!(rejoined.with_cart(|c| c.total().rupiah()), 30_000);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let db = db().await;
        let a = CartState::new(db.cart_snapshots(), "session-a");
        let b = CartState::new(db.cart_snapshots(), "session-b");
        a.restore().await.unwrap();
        b.restore().await.unwrap();

        a.mutate(|c| c.add_item(wonton(2))).await.unwrap();

        assert_eq!(a.with_cart(|c| c.item_count()), 2);
        assert_eq!(b.with_cart(|c| c.item_count()), 0);
    }

    #[tokio::test]
    async fn test_clear_drops_snapshot() {
        let db = db().await;
        let session = CartState::new(db.cart_snapshots(), "session-a");

        session.mutate(|c| c.add_item(wonton(2))).await.unwrap();
        session.clear().await.unwrap();

        assert!(session.with_cart(|c| c.is_empty()));
        assert!(db.cart_snapshots().load("session-a").await.unwrap().is_empty());
    }
}
