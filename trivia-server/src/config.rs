//! Per-route behaviour switches
//!
//! The CLI fills these from flags or environment:
//! - `TRIVIA_LIST_QUESTIONS_PAGING`: `full` (default) or `windowed`
//! - `TRIVIA_CATEGORY_CHECK`: `strict` (default) or `permissive`

use std::str::FromStr;

use crate::models::{PageMode, ValidationError};

/// Write-time policy for a new question's category reference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryCheck {
    /// Reject a category id that does not exist (422)
    #[default]
    Strict,
    /// Store whatever id was sent, even if orphaned
    Permissive,
}

impl CategoryCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl FromStr for CategoryCheck {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            _ => Err(ValidationError::InvalidVariant {
                field: "category check",
                value: s.to_owned(),
            }),
        }
    }
}

/// Route options shared by every handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Paging for `GET /questions`. Every other question listing is windowed.
    pub list_questions: PageMode,
    /// Category reference policy for `POST /questions/add`
    pub category_check: CategoryCheck,
}
