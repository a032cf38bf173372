//! `/api` routes, grouped the way clients address them.

use crate::handlers::{admins, collectors, reports, stalls, vendors};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(vendors::login))
        .route("/me", get(vendors::me))
        .route("/payrent", post(vendors::pay_rent))
        .route("/topup", post(vendors::top_up))
}

pub fn collector_routes() -> Router<AppState> {
    Router::new().route("/login", post(collectors::login))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admins::login))
        .route("/me", get(admins::me))
}

pub fn stall_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(stalls::list))
        .route("/lookup", get(stalls::lookup))
}

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/insights", get(reports::insights))
        .route("/city-wide-summary", get(reports::city_wide_summary))
        .route("/market-summary", get(reports::market_summary))
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/vendors", vendor_routes())
        .nest("/collectors", collector_routes())
        .nest("/admins", admin_routes())
        .nest("/stalls", stall_routes())
        .nest("/reports", report_routes())
        .with_state(state)
}
