//! Admin login (issues a session token) and token introspection.

use crate::error::AppError;
use crate::extractors::{AdminSession, ApiJson};
use crate::response::{ok, AdminIdentity, AdminLogin};
use crate::service::validation::AdminLoginRequest;
use crate::service::AccountService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AdminLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let creds = body.validate()?;
    let admin = AccountService::admin_login(&state.pool, &creds).await?;
    let token = state.tokens.issue(admin.id, &admin.name)?;
    Ok(ok(AdminLogin { token, admin }))
}

pub async fn me(AdminSession(claims): AdminSession) -> impl IntoResponse {
    ok(AdminIdentity::from(claims))
}
