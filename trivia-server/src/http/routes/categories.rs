//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::CatalogStore;
use crate::http::error::ApiError;
use crate::http::extractors::{Page, PathId};
use crate::http::server::AppState;
use crate::models::{category_map, CategoryMap, Question};

/// GET /categories response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// GET /categories/{id}/questions response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Size of the returned window, not of the whole category
    pub total_questions: usize,
    pub current_category: &'static str,
}

/// Load the id -> label mapping; 404 when no categories exist.
pub(crate) async fn load_category_map(store: &dyn CatalogStore) -> Result<CategoryMap, ApiError> {
    let categories = store.list_categories().await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("categories", "*"));
    }
    Ok(category_map(categories))
}

/// GET /categories - every category as id -> label
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = load_category_map(state.store.as_ref()).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    PathId(category): PathId,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let matches = state.store.questions_in_category(category).await?;
    let questions = page.window(&matches).to_vec();

    if questions.is_empty() {
        return Err(ApiError::not_found("category questions", category));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: "",
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
