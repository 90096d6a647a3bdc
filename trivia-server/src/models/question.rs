//! Question records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored question, serialized as `{id, question, answer, category, difficulty}`.
///
/// Every field but `id` is nullable: the add route inserts whatever the
/// client sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// A question that has not been assigned an id yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl NewQuestion {
    /// Attach the id assigned by the store.
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl Question {
    /// Case-insensitive substring match against the prompt.
    pub fn prompt_contains(&self, term: &str) -> bool {
        self.question
            .as_deref()
            .is_some_and(|prompt| prompt.to_lowercase().contains(&term.to_lowercase()))
    }
}
