// ============================================================================
// POST LIKE COUNTER API
// ============================================================================

// - Per-post like counter (read, like, unlike floored at zero)
// - Supabase (PostgREST) or in-memory record store
// - Permissive CORS on every response
// - Structured logging

mod config;
mod dto;
mod errors;
mod models;
mod routes;
mod service;
mod states;
mod store;

pub use states::AppState;

use config::{Config, StoreConfig};
use service::LikeCounterService;
use std::sync::Arc;
use store::{LikeStore, MemoryStore, SupabaseStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("invalid configuration");

    // One store client for the whole process, shared by every request
    let store: Arc<dyn LikeStore> = match &config.store {
        StoreConfig::Supabase { url, key } => {
            info!("Using Supabase record store at {}", url);
            Arc::new(SupabaseStore::new(url, key))
        }
        StoreConfig::Memory => {
            warn!("Using in-memory record store, likes are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        likes: LikeCounterService::new(store),
    };

    let app = routes::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");

    info!("Server running on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET     /health                   - Health check");
    info!("  GET     /likes?postId=<id>        - Current like count");
    info!("  POST    /likes?postId=<id>        - Add a like");
    info!("  PUT     /likes?postId=<id>        - Remove a like");
    info!("  (also served at /.netlify/functions/likes)");

    axum::serve(listener, app).await.expect("server error");
}
