use crate::{
    AppState,
    dto::{LikeOutcome, LikesQuery},
    errors::ApiError,
};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::Method,
};

/// ANY /likes?postId=...
/// GET reads the counter, POST adds a like, PUT removes one, OPTIONS is a
/// CORS preflight. Anything else is 405.
pub async fn likes(
    State(state): State<AppState>,
    method: Method,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<LikeOutcome, ApiError> {
    // An unreadable query string is treated as one without postId
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let query = LikesQuery::from_params(params);

    state.likes.handle(&method, &query).await
}
