mod memory;
mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use crate::models::LikeRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a record store. The display text is what the client
/// sees in the `error` field of a 500 response.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Remote(String),
    #[error("duplicate key value violates unique constraint on postId \"{0}\"")]
    Duplicate(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid record from store: {0}")]
    Decode(String),
}

/// Access to the `postlikes` table, keyed by `postId`.
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Returns the record for `post_id`, if any.
    async fn find(&self, post_id: &str) -> Result<Option<LikeRecord>, StoreError>;

    /// Inserts a new record. Fails if a record with the same `postId` exists.
    async fn insert(&self, record: &LikeRecord) -> Result<(), StoreError>;

    /// Sets `count` on the record for `post_id`. A missing record is left alone.
    async fn update_count(&self, post_id: &str, count: u64) -> Result<(), StoreError>;
}
