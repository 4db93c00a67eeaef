use crate::{
    dto::{LikeOutcome, LikesQuery},
    errors::ApiError,
    models::LikeRecord,
    store::LikeStore,
};
use axum::http::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-post like counter on top of a [`LikeStore`].
///
/// Holds no state of its own; every call is a single read followed by at most
/// one write. The read-modify-write is not atomic, so concurrent likes on the
/// same post may overwrite each other.
#[derive(Clone)]
pub struct LikeCounterService {
    store: Arc<dyn LikeStore>,
}

impl LikeCounterService {
    pub fn new(store: Arc<dyn LikeStore>) -> Self {
        Self { store }
    }

    /// Dispatches one request to the likes endpoint.
    pub async fn handle(
        &self,
        method: &Method,
        query: &LikesQuery,
    ) -> Result<LikeOutcome, ApiError> {
        if *method == Method::OPTIONS {
            return Ok(LikeOutcome::Preflight);
        }

        let post_id = query.post_id()?;

        match *method {
            Method::GET => self.fetch(post_id).await,
            Method::POST => self.increment(post_id).await,
            Method::PUT => self.decrement(post_id).await,
            _ => Err(ApiError::MethodNotAllowed),
        }
    }

    pub async fn fetch(&self, post_id: &str) -> Result<LikeOutcome, ApiError> {
        let record = self.store.find(post_id).await?.ok_or(ApiError::NotFound)?;
        debug!("Likes for {}: {}", post_id, record.count);

        Ok(LikeOutcome::Found(record))
    }

    pub async fn increment(&self, post_id: &str) -> Result<LikeOutcome, ApiError> {
        match self.store.find(post_id).await? {
            Some(record) => {
                let count = record.count.saturating_add(1);
                self.store.update_count(post_id, count).await?;
                info!("Like added: {} now at {}", post_id, count);
                Ok(LikeOutcome::Updated)
            }
            None => {
                self.store.insert(&LikeRecord::first_like(post_id)).await?;
                info!("Like record created: {}", post_id);
                Ok(LikeOutcome::Created)
            }
        }
    }

    /// Removes one like, never going below zero.
    pub async fn decrement(&self, post_id: &str) -> Result<LikeOutcome, ApiError> {
        let record = self.store.find(post_id).await?.ok_or(ApiError::NotFound)?;

        if record.count == 0 {
            return Ok(LikeOutcome::AlreadyZero);
        }

        let count = record.count - 1;
        self.store.update_count(post_id, count).await?;
        info!("Like removed: {} now at {}", post_id, count);

        Ok(LikeOutcome::Decremented)
    }
}
