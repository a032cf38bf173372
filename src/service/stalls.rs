//! Stall listing and business-id lookup.

use crate::error::AppError;
use crate::model::StallStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct StallListing {
    pub id: i32,
    pub stall_code: String,
    pub status: StallStatus,
    pub rent_amount: Decimal,
    pub lease_end: Option<NaiveDate>,
    pub tenant_name: Option<String>,
    pub wallet_balance: Option<Decimal>,
    pub market_name: String,
}

/// Vendor joined to their stall and market. Stall fields are null for a vendor without a stall.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct StallLookup {
    pub stall_code: Option<String>,
    pub stall_status: Option<StallStatus>,
    pub rent_amount: Option<Decimal>,
    pub lease_end: Option<NaiveDate>,
    pub vendor_name: String,
    pub wallet_balance: Decimal,
    pub business_id_number: String,
    pub market_name: Option<String>,
}

pub struct StallService;

impl StallService {
    /// All stalls, or only those of `market_name`, ordered by stall code.
    pub async fn list(pool: &PgPool, market_name: Option<&str>) -> Result<Vec<StallListing>, AppError> {
        tracing::debug!(?market_name, "listing stalls");
        let rows = sqlx::query_as(
            r#"
            SELECT s.id, s.stall_code, s.status, s.rent_amount, s.lease_end,
                   v.name AS tenant_name, v.wallet_balance, m.name AS market_name
            FROM stalls s
            LEFT JOIN vendors v ON s.vendor_id = v.id
            JOIN markets m ON s.market_id = m.id
            WHERE ($1::text IS NULL OR m.name = $1)
            ORDER BY s.stall_code, m.name
            "#,
        )
        .bind(market_name)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn lookup(pool: &PgPool, business_id: &str) -> Result<StallLookup, AppError> {
        let row: Option<StallLookup> = sqlx::query_as(
            r#"
            SELECT s.stall_code, s.status AS stall_status, s.rent_amount, s.lease_end,
                   v.name AS vendor_name, v.wallet_balance, v.business_id_number,
                   m.name AS market_name
            FROM vendors v
            LEFT JOIN stalls s ON v.id = s.vendor_id
            LEFT JOIN markets m ON s.market_id = m.id
            WHERE v.business_id_number = $1
            ORDER BY s.id
            LIMIT 1
            "#,
        )
        .bind(business_id.trim())
        .fetch_optional(pool)
        .await?;
        row.ok_or_else(|| AppError::NotFound("No stall found for this Business ID.".into()))
    }
}
