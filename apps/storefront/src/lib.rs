//! # Kedai Storefront
//!
//! HTTP layer for the storefront and admin back office.
//!
//! ## Request Flow
//! ```text
//!   Web frontend
//!        │ JSON over HTTP
//!   routes/* (axum handlers)
//!        │
//!   state (Database handle · CartState · StoreConfig)
//!        │
//!   kedai-core (cart math, message composer, finance aggregation)
//!   kedai-db   (repositories)
//! ```
//!
//! The handlers stay thin: validate input, call a repository or a core
//! function, map errors to [`error::ApiError`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod whatsapp;

pub use config::StoreConfig;
pub use error::ApiError;
pub use state::{AppState, CartState};
