//! In-process catalog store
//!
//! Used by tests and by `trivia serve --in-memory`. Ids are assigned from a
//! counter that never reuses a deleted id, like a SERIAL column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{CatalogStore, StoreError, StoreResult};
use crate::models::{Category, NewQuestion, Question, DEFAULT_CATEGORIES};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    questions: BTreeMap<i32, Question>,
    last_id: i32,
}

/// Catalog store held in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the default category set.
    pub fn seeded() -> Self {
        Self::with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, label)| Category { id: *id, label: (*label).to_owned() }),
        )
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c.label)).collect(),
            ..Default::default()
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .map(|(id, label)| Category { id: *id, label: label.clone() })
            .collect())
    }

    async fn category_exists(&self, id: i32) -> StoreResult<bool> {
        Ok(self.tables.read().await.categories.contains_key(&id))
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i32) -> StoreResult<Option<Question>> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == Some(category))
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.prompt_contains(term))
            .cloned()
            .collect())
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;
        tables.last_id += 1;
        let stored = question.with_id(tables.last_id);
        tables.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        match self.tables.write().await.questions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                resource: "question",
                id: id.to_string(),
            }),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
