use std::sync::Arc;

use inkpost::api::BackendClient;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub api: BackendClient,
    pub rate_limiter: Arc<RateLimiter>,
}
