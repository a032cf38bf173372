//! Credential checks for vendors, collectors and admins, plus the vendor dashboard.

use crate::auth::{reject_unknown_account, verify_password};
use crate::error::AppError;
use crate::model::{StallStatus, TransactionKind};
use crate::service::validation::Credentials;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

/// Vendor fields returned on login. Never includes the password.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct VendorProfile {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub wallet_balance: Decimal,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct CollectorProfile {
    pub id: i32,
    pub collector_id: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct AdminProfile {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct DashboardVendor {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub wallet_balance: Decimal,
    pub business_id_number: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct DashboardStall {
    pub id: i32,
    pub stall_code: String,
    pub lease_end: Option<NaiveDate>,
    pub payment_status: StallStatus,
    pub daily_rent_rate: Decimal,
    pub market_name: String,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct LedgerEntry {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct VendorDashboard {
    pub vendor: DashboardVendor,
    pub stall: Option<DashboardStall>,
    pub transactions: Vec<LedgerEntry>,
}

/// Most recent ledger rows shown on the dashboard.
pub const DASHBOARD_TRANSACTIONS: i64 = 10;

pub struct AccountService;

impl AccountService {
    /// Unknown business id is not-found; a wrong password is unauthorized.
    pub async fn vendor_login(pool: &PgPool, creds: &Credentials) -> Result<VendorProfile, AppError> {
        let row: Option<VendorLoginRow> = sqlx::query_as(
            "SELECT id, name, email, wallet_balance, password FROM vendors WHERE business_id_number = $1",
        )
        .bind(&creds.login)
        .fetch_optional(pool)
        .await?;

        let row = row.ok_or_else(|| AppError::NotFound("Vendor with this Business ID not found.".into()))?;
        check_password(&creds.password, row.password.as_deref())?;
        tracing::info!(vendor_id = row.profile.id, "vendor logged in");
        Ok(row.profile)
    }

    pub async fn collector_login(pool: &PgPool, creds: &Credentials) -> Result<CollectorProfile, AppError> {
        let row: Option<CollectorLoginRow> = sqlx::query_as(
            "SELECT id, collector_id, full_name, password FROM collectors WHERE collector_id = $1",
        )
        .bind(&creds.login)
        .fetch_optional(pool)
        .await?;

        let row = row.ok_or_else(|| AppError::NotFound("Collector ID not found.".into()))?;
        check_password(&creds.password, Some(&row.password))?;
        tracing::info!(collector_id = %row.profile.collector_id, "collector logged in");
        Ok(row.profile)
    }

    /// Unknown username and wrong password are indistinguishable, in body and in timing.
    pub async fn admin_login(pool: &PgPool, creds: &Credentials) -> Result<AdminProfile, AppError> {
        let row: Option<AdminLoginRow> = sqlx::query_as(
            "SELECT id, full_name AS name, password FROM admins WHERE username = $1",
        )
        .bind(&creds.login)
        .fetch_optional(pool)
        .await?;

        let Some(row) = row else {
            reject_unknown_account(&creds.password);
            return Err(invalid_credentials());
        };
        check_password(&creds.password, Some(&row.password))?;
        tracing::info!(admin_id = row.profile.id, "admin logged in");
        Ok(row.profile)
    }

    /// Vendor profile, their stall (if any) and latest ledger entries.
    pub async fn vendor_dashboard(pool: &PgPool, business_id: &str) -> Result<VendorDashboard, AppError> {
        let vendor: DashboardVendor = sqlx::query_as(
            "SELECT id, name, email, wallet_balance, business_id_number FROM vendors WHERE business_id_number = $1",
        )
        .bind(business_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Demo vendor not found.".into()))?;

        let stall: Option<DashboardStall> = sqlx::query_as(
            r#"
            SELECT s.id, s.stall_code, s.lease_end, s.status AS payment_status,
                   s.rent_amount AS daily_rent_rate, m.name AS market_name
            FROM stalls s
            JOIN markets m ON s.market_id = m.id
            WHERE s.vendor_id = $1
            ORDER BY s.id
            LIMIT 1
            "#,
        )
        .bind(vendor.id)
        .fetch_optional(pool)
        .await?;

        let transactions: Vec<LedgerEntry> = sqlx::query_as(
            r#"
            SELECT id, type, amount, transaction_date AS date
            FROM transactions
            WHERE vendor_id = $1
            ORDER BY transaction_date DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(vendor.id)
        .bind(DASHBOARD_TRANSACTIONS)
        .fetch_all(pool)
        .await?;

        Ok(VendorDashboard {
            vendor,
            stall,
            transactions,
        })
    }
}

#[derive(sqlx::FromRow)]
struct VendorLoginRow {
    #[sqlx(flatten)]
    profile: VendorProfile,
    password: Option<String>,
}

#[derive(sqlx::FromRow)]
struct CollectorLoginRow {
    #[sqlx(flatten)]
    profile: CollectorProfile,
    password: String,
}

#[derive(sqlx::FromRow)]
struct AdminLoginRow {
    #[sqlx(flatten)]
    profile: AdminProfile,
    password: String,
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials.".into())
}

fn check_password(supplied: &str, stored: Option<&str>) -> Result<(), AppError> {
    let matched = match stored {
        Some(stored) => verify_password(supplied, stored),
        None => reject_unknown_account(supplied),
    };
    if matched {
        Ok(())
    } else {
        Err(invalid_credentials())
    }
}
