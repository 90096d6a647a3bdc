//! Catalog store contract
//!
//! Handlers only see `dyn CatalogStore`, so the Postgres store can be
//! swapped for the in-memory one in tests.

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend failed (connectivity, constraint violation, ...)
    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),

    /// The operation matched no rows
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read/write access to categories and questions.
///
/// Every list is ordered by id.
#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn category_exists(&self, id: i32) -> StoreResult<bool>;

    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn get_question(&self, id: i32) -> StoreResult<Option<Question>>;

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>>;

    /// Questions whose prompt contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn count_questions(&self) -> StoreResult<i64>;

    /// Insert and return the stored question with its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Delete by id. `StoreError::NotFound` if nothing was deleted.
    async fn delete_question(&self, id: i32) -> StoreResult<()>;

    /// Check the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
