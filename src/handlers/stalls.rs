use crate::error::AppError;
use crate::handlers::MarketQuery;
use crate::response::ok;
use crate::service::validation::required_param;
use crate::service::StallService;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub business_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<impl IntoResponse, AppError> {
    let market = query
        .market_name
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    let stalls = StallService::list(&state.pool, market.as_deref()).await?;
    Ok(ok(stalls))
}

pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let business_id = required_param(query.business_id, "Business ID is required.")?;
    let record = StallService::lookup(&state.pool, &business_id).await?;
    Ok(ok(record))
}
