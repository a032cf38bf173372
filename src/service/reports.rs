//! Read-side aggregation: per-market summaries and the overdue / renewal drill-downs.

use crate::error::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

/// Stall counts and revenue split for one market.
/// `paid_stalls + unpaid_stalls + vacant_stalls == total_stalls`.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct MarketSummary {
    pub market_name: String,
    pub total_stalls: i64,
    pub occupied_stalls: i64,
    pub vacant_stalls: i64,
    pub paid_stalls: i64,
    pub unpaid_stalls: i64,
    pub collected_revenue: Decimal,
    pub outstanding_revenue: Decimal,
}

impl MarketSummary {
    pub fn zeroed(market_name: &str) -> Self {
        MarketSummary {
            market_name: market_name.to_string(),
            total_stalls: 0,
            occupied_stalls: 0,
            vacant_stalls: 0,
            paid_stalls: 0,
            unpaid_stalls: 0,
            collected_revenue: Decimal::new(0, 2),
            outstanding_revenue: Decimal::new(0, 2),
        }
    }
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct OverduePayment {
    pub tenant_name: String,
    pub stall_code: String,
    pub lease_end: NaiveDate,
    pub rent_amount: Decimal,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct UpcomingRenewal {
    pub tenant_name: String,
    pub stall_code: String,
    pub lease_end: NaiveDate,
    pub wallet_balance: Decimal,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub overdue_payments: Vec<OverduePayment>,
    pub upcoming_renewals: Vec<UpcomingRenewal>,
}

/// Renewal look-ahead window.
pub const RENEWAL_WINDOW_DAYS: i32 = 7;

fn summary_sql(filter_by_name: bool) -> String {
    let filter = if filter_by_name { "WHERE m.name = $1" } else { "" };
    format!(
        r#"
        SELECT
            m.name AS market_name,
            COUNT(s.id) AS total_stalls,
            COUNT(s.vendor_id) AS occupied_stalls,
            COUNT(s.id) FILTER (WHERE s.status = 'vacant') AS vacant_stalls,
            COUNT(s.id) FILTER (WHERE s.status = 'paid') AS paid_stalls,
            COUNT(s.id) FILTER (WHERE s.status = 'unpaid') AS unpaid_stalls,
            COALESCE(SUM(s.rent_amount) FILTER (WHERE s.status = 'paid'), 0)::NUMERIC(14, 2) AS collected_revenue,
            COALESCE(SUM(s.rent_amount) FILTER (WHERE s.status = 'unpaid'), 0)::NUMERIC(14, 2) AS outstanding_revenue
        FROM markets m
        LEFT JOIN stalls s ON s.market_id = m.id
        {}
        GROUP BY m.name
        ORDER BY m.name
        "#,
        filter
    )
}

const OVERDUE_SQL: &str = r#"
    SELECT v.name AS tenant_name, s.stall_code, s.lease_end, s.rent_amount
    FROM stalls s
    JOIN vendors v ON s.vendor_id = v.id
    JOIN markets m ON s.market_id = m.id
    WHERE s.status = 'unpaid' AND s.lease_end < NOW() AND m.name = $1
    ORDER BY s.lease_end ASC, s.stall_code
"#;

const RENEWALS_SQL: &str = r#"
    SELECT v.name AS tenant_name, s.stall_code, s.lease_end, v.wallet_balance
    FROM stalls s
    JOIN vendors v ON s.vendor_id = v.id
    JOIN markets m ON s.market_id = m.id
    WHERE s.status = 'paid'
      AND s.lease_end BETWEEN NOW() AND NOW() + make_interval(days => $2)
      AND m.name = $1
    ORDER BY s.lease_end ASC, s.stall_code
"#;

pub struct ReportService;

impl ReportService {
    /// One summary per market, ordered by name.
    pub async fn city_wide_summary(pool: &PgPool) -> Result<Vec<MarketSummary>, AppError> {
        let rows = sqlx::query_as(&summary_sql(false)).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Summary for one market; zeroed when the market is unknown.
    pub async fn market_summary(pool: &PgPool, market_name: &str) -> Result<MarketSummary, AppError> {
        let row: Option<MarketSummary> = sqlx::query_as(&summary_sql(true))
            .bind(market_name)
            .fetch_optional(pool)
            .await?;
        Ok(row.unwrap_or_else(|| MarketSummary::zeroed(market_name)))
    }

    /// Overdue stalls (oldest due first) and renewals due within the window (soonest first).
    pub async fn insights(pool: &PgPool, market_name: &str) -> Result<MarketInsights, AppError> {
        let overdue = sqlx::query_as::<_, OverduePayment>(OVERDUE_SQL)
            .bind(market_name)
            .fetch_all(pool);
        let renewals = sqlx::query_as::<_, UpcomingRenewal>(RENEWALS_SQL)
            .bind(market_name)
            .bind(RENEWAL_WINDOW_DAYS)
            .fetch_all(pool);
        let (overdue_payments, upcoming_renewals) = tokio::try_join!(overdue, renewals)?;
        Ok(MarketInsights {
            overdue_payments,
            upcoming_renewals,
        })
    }
}
