//! Quiz endpoint - one unseen question per turn

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{category_id_from_json, Question};
use crate::quiz::{self, ALL_CATEGORIES};

/// POST /quizzes request
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already served this session
    pub previous_questions: Option<Vec<i32>>,
    /// Category id, `0` for all; also accepts `{"type", "id"}`
    #[serde(default)]
    pub quiz_category: Value,
}

/// POST /quizzes response. Both fields are absent once the pool is empty.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<Question>,
}

/// POST /quizzes - next random question not in `previous_questions`
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = category_id_from_json(&req.quiz_category)?.unwrap_or(ALL_CATEGORIES);
    let previous = req.previous_questions.unwrap_or_default();

    let candidates = if category == ALL_CATEGORIES {
        state.store.list_questions().await?
    } else {
        state.store.questions_in_category(category).await?
    };

    let pool = quiz::unseen(candidates, &previous);
    let next = quiz::pick_next(&pool, &mut rand::thread_rng());
    tracing::debug!(category, pool = pool.len(), served = previous.len(), "Quiz turn");

    let response = match next {
        Some(question) => QuizResponse {
            success: true,
            previous_questions: Some(previous),
            current_question: Some(question),
        },
        None => QuizResponse {
            success: true,
            previous_questions: None,
            current_question: None,
        },
    };

    Ok(Json(response))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
