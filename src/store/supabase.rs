use super::{LikeStore, StoreError};
use crate::models::LikeRecord;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

const TABLE: &str = "postlikes";

/// Record store backed by the Supabase REST (PostgREST) API.
///
/// `Client` pools connections internally, so one instance is built at start-up
/// and shared by every request.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    table_url: String,
    key: String,
}

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

impl SupabaseStore {
    pub fn new(url: &str, key: &str) -> Self {
        Self {
            client: Client::new(),
            table_url: format!("{}/rest/v1/{}", url.trim_end_matches('/'), TABLE),
            key: key.to_string(),
        }
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.table_url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }
}

fn eq_filter(post_id: &str) -> String {
    format!("eq.{}", post_id)
}

/// Turns a failed PostgREST response into a `StoreError`, keeping the
/// server's own message when the body can be decoded.
fn remote_error(status: StatusCode, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => StoreError::Remote(err.message),
        Err(_) if body.trim().is_empty() => StoreError::Remote(status.to_string()),
        Err(_) => StoreError::Remote(format!("{}: {}", status, body.trim())),
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(remote_error(status, &body))
}

#[async_trait]
impl LikeStore for SupabaseStore {
    async fn find(&self, post_id: &str) -> Result<Option<LikeRecord>, StoreError> {
        let filter = eq_filter(post_id);
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("postId", filter.as_str()), ("limit", "1")])
            .send()
            .await?;
        let body = ensure_success(response).await?.text().await?;

        let rows: Vec<LikeRecord> =
            serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
        debug!("Store lookup for {} returned {} row(s)", post_id, rows.len());

        Ok(rows.into_iter().next())
    }

    async fn insert(&self, record: &LikeRecord) -> Result<(), StoreError> {
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update_count(&self, post_id: &str, count: u64) -> Result<(), StoreError> {
        let filter = eq_filter(post_id);
        let response = self
            .request(Method::PATCH)
            .header("Prefer", "return=minimal")
            .query(&[("postId", filter.as_str())])
            .json(&serde_json::json!({ "count": count }))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
