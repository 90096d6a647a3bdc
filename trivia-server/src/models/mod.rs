//! Domain models
//!
//! Request bodies are read leniently (numbers or numeric strings);
//! anything that cannot be read returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;

pub use validation::{int_from_json, ValidationError};
pub use category::{category_id_from_json, category_map, Category, CategoryMap, DEFAULT_CATEGORIES};
pub use question::{NewQuestion, Question};
pub use pagination::{PageMode, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
