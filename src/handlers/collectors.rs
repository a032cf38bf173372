use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{ok, CollectorLogin, LOGIN_SUCCESS};
use crate::service::validation::CollectorLoginRequest;
use crate::service::AccountService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CollectorLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let creds = body.validate()?;
    let collector = AccountService::collector_login(&state.pool, &creds).await?;
    Ok(ok(CollectorLogin {
        msg: LOGIN_SUCCESS,
        collector,
    }))
}
