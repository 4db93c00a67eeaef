use crate::models::LikeRecord;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Successful result of one call to the likes endpoint.
#[derive(Debug, PartialEq)]
pub enum LikeOutcome {
    /// CORS preflight, answered without touching the store
    Preflight,
    Found(LikeRecord),
    Created,
    Updated,
    AlreadyZero,
    Decremented,
}

impl IntoResponse for LikeOutcome {
    fn into_response(self) -> Response {
        match self {
            LikeOutcome::Preflight => StatusCode::OK.into_response(),
            LikeOutcome::Found(record) => (StatusCode::OK, Json(record)).into_response(),
            LikeOutcome::Created => {
                (StatusCode::CREATED, Json(json!({ "created": true }))).into_response()
            }
            LikeOutcome::Updated => (StatusCode::OK, Json(json!({ "updated": true }))).into_response(),
            LikeOutcome::AlreadyZero => (
                StatusCode::OK,
                Json(json!({ "message": "Count is already 0" })),
            )
                .into_response(),
            LikeOutcome::Decremented => {
                (StatusCode::OK, Json(json!({ "decremented": true }))).into_response()
            }
        }
    }
}
