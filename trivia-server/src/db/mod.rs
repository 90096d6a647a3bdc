//! Database layer - catalog store trait, Postgres and in-memory stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default)
//! - One independent query per store call, no cross-call transactions
//! - Typed errors: "no rows" is `StoreError::NotFound`, anything else is
//!   `StoreError::Backend`

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;
pub use store::{CatalogStore, StoreError, StoreResult};
