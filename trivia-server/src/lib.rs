//! trivia-server: HTTP backend for a trivia question bank
//!
//! Lists categories, pages through questions, adds, deletes and searches
//! them, and serves one unseen random question per quiz turn.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use config::{CategoryCheck, RouteOptions};
pub use db::{CatalogStore, MemoryStore, PgStore, StoreError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
