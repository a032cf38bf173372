//! HTTP handlers for vendors, collectors, admins, stalls and reports.

pub mod admins;
pub mod collectors;
pub mod reports;
pub mod stalls;
pub mod vendors;

use serde::Deserialize;

/// `?market_name=` filter shared by stall and report endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MarketQuery {
    pub market_name: Option<String>,
}
