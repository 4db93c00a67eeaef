mod health;
mod likes;

use crate::AppState;
use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{any, get},
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub use health::health_check;
pub use likes::likes;

/// Builds the application router. Every response, errors included, carries
/// the same permissive CORS headers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/likes", any(likes))
        // Legacy Netlify function path, kept for existing clients
        .route("/.netlify/functions/likes", any(likes))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,PUT,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
