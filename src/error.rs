use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures that reach the HTTP caller.
///
/// Provider errors never show up here directly: each pipeline stage turns them
/// into an empty or unresolved result, and only the planner maps that onto one
/// of these variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("{0}")]
    Validation(String),

    #[error("候補地の生成に失敗しました。")]
    DestinationGenerationFailed,

    #[error("「{0}」の緯度経度の取得に失敗しました。")]
    GeocodingFailed(String),
}

impl PlannerError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlannerError::DestinationGenerationFailed | PlannerError::GeocodingFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
