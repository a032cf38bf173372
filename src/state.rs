//! Shared application state for all routes.

use crate::auth::TokenKeys;
use crate::config::Settings;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: Arc<TokenKeys>,
    pub demo_business_id: Arc<str>,
}

impl AppState {
    pub fn new(pool: PgPool, settings: &Settings) -> Self {
        AppState {
            pool,
            tokens: Arc::new(TokenKeys::new(&settings.jwt_secret, settings.token_ttl_secs)),
            demo_business_id: Arc::from(settings.demo_business_id.as_str()),
        }
    }
}
