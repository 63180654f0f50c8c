//! # Repository Module
//!
//! One repository per table. Each repository is a lightweight handle over
//! the shared connection pool; `Database` hands them out via accessor
//! methods.

pub mod cart;
pub mod expense;
pub mod inventory;
pub mod menu;
pub mod order;
