//! # kedai-db: Database Layer for Kedai
//!
//! SQLite persistence for the storefront and back office, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//!   apps/storefront (axum handlers)
//!        │
//!   ┌────▼──────────────────────────────────────────┐
//!   │               kedai-db (THIS CRATE)           │
//!   │                                               │
//!   │   Database (pool.rs)   Repositories           │
//!   │   SqlitePool, WAL      menus / orders /       │
//!   │   Migrations           expenses / inventory / │
//!   │   (embedded)           cart snapshots         │
//!   └────┬──────────────────────────────────────────┘
//!        │
//!   SQLite database file (or :memory: in tests)
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations, one per table
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kedai_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./kedai.db")).await?;
//! let menus = db.menus().list().await?;
//! ```
//!
//! Queries are runtime-bound (`sqlx::query_as::<_, T>`) rather than the
//! compile-time macros, so the crate builds without a prepared database.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::cart::CartSnapshotRepository;
pub use repository::expense::ExpenseRepository;
pub use repository::inventory::InventoryRepository;
pub use repository::menu::MenuRepository;
pub use repository::order::OrderRepository;
