//! Extract and verify the admin bearer token.

use crate::auth::AdminClaims;
use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

const BEARER: &str = "Bearer ";

/// Verified admin claims from `Authorization: Bearer <token>`.
#[derive(Clone, Debug)]
pub struct AdminSession(pub AdminClaims);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix(BEARER))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Missing bearer token.".into()))?;
        let claims = state.tokens.verify(token)?;
        Ok(AdminSession(claims))
    }
}
