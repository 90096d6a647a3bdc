//! API error type with IntoResponse
//!
//! Every failure renders the same envelope:
//! `{"success": false, "error": <status code>, "message": <text>}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (400)
    BadRequest { reason: String },

    /// Missing credentials (401)
    Unauthorized,

    /// Credentials refused (403)
    Forbidden,

    /// Missing entity, empty result, or unknown route (404)
    NotFound { resource: &'static str, id: String },

    /// Known path, wrong method (405)
    MethodNotAllowed,

    /// Request understood but cannot be applied (422)
    Unprocessable { reason: String },

    /// Store backend failure (422, logged)
    Store(StoreError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } | Self::Store(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for the envelope.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad request",
            Self::Unauthorized => "Unauthorized. Need appropriate authentication/access to the API",
            Self::Forbidden => "Request forbidden. Authentication or wrong API key",
            Self::NotFound { .. } => "Undefined or not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Unprocessable { .. } | Self::Store(_) => "Unable to process",
            Self::Internal { .. } => "Internal server error",
        }
    }

    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the detail, return the fixed message
        match &self {
            Self::Store(e) => tracing::error!("Store error: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            Self::BadRequest { reason } => tracing::debug!("Bad request: {}", reason),
            Self::Unprocessable { reason } => tracing::debug!("Unprocessable: {}", reason),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            _ => {}
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message()
        });

        (status, Json(body)).into_response()
    }
}

/// Body fields that parse as JSON but hold unusable values are 422.
impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Store(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                Self::BadRequest {
                    reason: rejection.body_text(),
                }
            }
            // Well-formed JSON whose fields have the wrong shape
            _ => Self::Unprocessable {
                reason: rejection.body_text(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn envelope(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let (status, body) = envelope(ApiError::not_found("question", 39)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Undefined or not found");
    }

    #[tokio::test]
    async fn store_failure_is_422() {
        let err = ApiError::from(StoreError::Backend(sqlx::Error::PoolTimedOut));
        let (status, body) = envelope(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "Unable to process");
    }

    #[tokio::test]
    async fn store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound {
            resource: "question",
            id: "5".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reserved_codes_render_envelope() {
        for (err, code) in [
            (ApiError::BadRequest { reason: "x".into() }, 400),
            (ApiError::Unauthorized, 401),
            (ApiError::Forbidden, 403),
            (ApiError::MethodNotAllowed, 405),
            (ApiError::Internal { message: "boom".into() }, 500),
        ] {
            let (status, body) = envelope(err).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(body["error"], code);
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::from(ValidationError::InvalidFormat {
            field: "category",
            reason: "must be a 32-bit integer",
        });
        let (status, body) = envelope(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Unable to process");
    }
}
