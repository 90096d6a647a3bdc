//! Categories and the id -> label mapping returned to clients

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::validation::{int_from_json, ValidationError};

/// Categories seeded into a fresh store
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    /// Display label, stored in the `type` column
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub label: String,
}

/// Category id -> label. Serializes as a JSON object keyed by the id.
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the id -> label mapping.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}

/// Read a category reference as clients send it.
///
/// Accepts a number, a numeric string, or the quiz frontend's
/// `{"type": "Science", "id": 1}` object. `null` reads as `None`.
pub fn category_id_from_json(value: &Value) -> Result<Option<i32>, ValidationError> {
    match value {
        Value::Object(obj) => match obj.get("id") {
            Some(id) => int_from_json("category", id),
            None => Err(ValidationError::InvalidFormat {
                field: "category",
                reason: "object must carry an 'id'",
            }),
        },
        other => int_from_json("category", other),
    }
}
