//! Pagination window over identifier-sorted result sets

use std::str::FromStr;

use serde::Deserialize;

use super::ValidationError;

/// Fixed page size for every question listing
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to minimum of 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Offset of the first item on this page.
    pub fn offset(&self) -> usize {
        ((self.page - 1) as usize).saturating_mul(self.per_page as usize)
    }

    pub fn limit(&self) -> usize {
        self.per_page as usize
    }

    /// Select `[(page-1)*per_page, page*per_page)` from `items`.
    ///
    /// Pages past the end yield an empty slice.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .map(|p| p.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(1);
        Self::new(page, QUESTIONS_PER_PAGE)
    }
}

/// Whether a route windows its question list or returns all of it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageMode {
    /// Return every question and ignore `page`
    #[default]
    Full,
    /// Return only the requested window
    Windowed,
}

impl PageMode {
    pub fn apply<'a, T>(&self, page: Pagination, items: &'a [T]) -> &'a [T] {
        match self {
            Self::Full => items,
            Self::Windowed => page.window(items),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Windowed => "windowed",
        }
    }
}

impl FromStr for PageMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "windowed" => Ok(Self::Windowed),
            _ => Err(ValidationError::InvalidVariant {
                field: "paging",
                value: s.to_owned(),
            }),
        }
    }
}
