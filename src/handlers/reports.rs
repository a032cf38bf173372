//! Reporting endpoints for the market and city-wide dashboards.

use crate::error::AppError;
use crate::handlers::MarketQuery;
use crate::response::ok;
use crate::service::validation::required_param;
use crate::service::ReportService;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

const MARKET_NAME_REQUIRED: &str = "market_name query parameter is required.";

pub async fn insights(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<impl IntoResponse, AppError> {
    let market = required_param(query.market_name, MARKET_NAME_REQUIRED)?;
    Ok(ok(ReportService::insights(&state.pool, &market).await?))
}

pub async fn city_wide_summary(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(ReportService::city_wide_summary(&state.pool).await?))
}

pub async fn market_summary(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<impl IntoResponse, AppError> {
    let market = required_param(query.market_name, MARKET_NAME_REQUIRED)?;
    Ok(ok(ReportService::market_summary(&state.pool, &market).await?))
}
