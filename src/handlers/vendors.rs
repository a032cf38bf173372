//! Vendor login, dashboard, rent payment and wallet top-up.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{ok, RentPaid, VendorLogin, LOGIN_SUCCESS, PAYMENT_SUCCESS};
use crate::service::validation::{PayRentRequest, TopUpRequest, VendorLoginRequest};
use crate::service::{AccountService, LedgerService};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<VendorLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let creds = body.validate()?;
    let vendor = AccountService::vendor_login(&state.pool, &creds).await?;
    Ok(ok(VendorLogin {
        msg: LOGIN_SUCCESS,
        vendor,
    }))
}

/// Dashboard for the configured demo vendor.
pub async fn me(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dashboard = AccountService::vendor_dashboard(&state.pool, &state.demo_business_id).await?;
    Ok(ok(dashboard))
}

pub async fn pay_rent(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PayRentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let cmd = body.validate()?;
    let payment = LedgerService::pay_rent(&state.pool, &cmd).await?;
    Ok(ok(RentPaid {
        msg: PAYMENT_SUCCESS,
        lease_end: payment.lease_end,
    }))
}

pub async fn top_up(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TopUpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let cmd = body.validate()?;
    let balance = LedgerService::top_up(&state.pool, &cmd).await?;
    Ok(ok(balance))
}
