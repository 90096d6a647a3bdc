//! Question endpoints - list, delete, add, search

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::categories::load_category_map;
use crate::config::CategoryCheck;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, Page, PathId};
use crate::http::server::AppState;
use crate::models::{category_id_from_json, int_from_json, CategoryMap, NewQuestion, Question};

/// GET /questions response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
    pub total_questions: usize,
}

/// DELETE /questions/{id} response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// POST /questions/add request. Every field may be omitted.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub difficulty: Value,
}

/// POST /questions/add response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// The category exactly as submitted
    pub current_category: Value,
}

/// POST /questions/search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// POST /questions/search response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of every stored question, not just the matches
    pub total_questions: i64,
}

/// GET /questions - every question plus the category mapping.
///
/// Paging follows `RouteOptions::list_questions`.
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let all = state.store.list_questions().await?;
    let categories = load_category_map(state.store.as_ref()).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: state.routes.list_questions.apply(page, &all).to_vec(),
        categories,
        total_questions: all.len(),
    }))
}

/// DELETE /questions/{id} - delete and return a page of what remains
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
    Page(page): Page,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    if state.store.get_question(id).await?.is_none() {
        return Err(ApiError::not_found("question", id));
    }

    // A concurrent delete can still win between the lookup and here; the
    // store then reports NotFound.
    state.store.delete_question(id).await?;
    tracing::info!(id, "Question deleted");

    let remaining = state.store.list_questions().await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        questions: page.window(&remaining).to_vec(),
        total_questions: remaining.len(),
    }))
}

/// POST /questions/add - insert a question and return a page of the list
async fn create_question(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let category = category_id_from_json(&req.category)?;
    let difficulty = int_from_json("difficulty", &req.difficulty)?;

    if let (Some(id), CategoryCheck::Strict) = (category, state.routes.category_check) {
        if !state.store.category_exists(id).await? {
            return Err(ApiError::Unprocessable {
                reason: format!("category {} does not exist", id),
            });
        }
    }

    let created = state
        .store
        .insert_question(NewQuestion {
            question: req.question,
            answer: req.answer,
            category,
            difficulty,
        })
        .await?;
    tracing::info!(id = created.id, ?category, "Question created");

    let all = state.store.list_questions().await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions: page.window(&all).to_vec(),
        total_questions: all.len(),
        current_category: req.category,
    }))
}

/// POST /questions/search - case-insensitive substring search on the prompt
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req.search_term.ok_or_else(|| ApiError::Unprocessable {
        reason: "searchTerm is required".into(),
    })?;

    let matches = state.store.search_questions(&term).await?;
    let questions = page.window(&matches).to_vec();

    if questions.is_empty() {
        return Err(ApiError::not_found("search", term));
    }

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions: state.store.count_questions().await?,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/add", post(create_question))
        .route("/questions/search", post(search_questions))
}
