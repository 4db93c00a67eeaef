use crate::service::LikeCounterService;

/// Shared across all requests. The service holds the one store client built
/// at start-up.
#[derive(Clone)]
pub struct AppState {
    pub likes: LikeCounterService,
}
