//! Wallet-affecting writes: rent payment and top-up. Each runs in one transaction;
//! an early return drops the transaction, which rolls it back.

use crate::error::AppError;
use crate::model::{StallStatus, TransactionKind};
use crate::service::validation::{PayRent, TopUp};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{PgConnection, PgPool};

#[derive(Clone, Debug, Serialize)]
pub struct RentPayment {
    pub stall_id: i32,
    pub lease_end: NaiveDate,
}

#[derive(Clone, Debug, Serialize)]
pub struct WalletBalance {
    pub new_balance: Decimal,
}

/// New lease end after paying `days`. A lease that ends today or earlier restarts from today.
pub fn extend_lease(current: Option<NaiveDate>, today: NaiveDate, days: u32) -> NaiveDate {
    let start = current.filter(|end| *end > today).unwrap_or(today);
    start + Duration::days(i64::from(days))
}

pub struct LedgerService;

impl LedgerService {
    /// Extend the stall lease and record a negative `rent` entry. No balance check: the
    /// payment is confirmed upstream. The stall row stays locked until commit.
    pub async fn pay_rent(pool: &PgPool, cmd: &PayRent) -> Result<RentPayment, AppError> {
        let mut tx = pool.begin().await?;

        let stall: Option<(Option<i32>, Option<NaiveDate>, NaiveDate)> = sqlx::query_as(
            "SELECT vendor_id, lease_end, CURRENT_DATE FROM stalls WHERE id = $1 FOR UPDATE",
        )
        .bind(cmd.stall_id)
        .fetch_optional(&mut *tx)
        .await?;
        let (tenant, current_end, today) =
            stall.ok_or_else(|| AppError::NotFound("Stall not found.".into()))?;
        if tenant.is_none() {
            return Err(AppError::Validation("Stall is vacant.".into()));
        }

        let lease_end = extend_lease(current_end, today, cmd.days);
        tracing::debug!(stall_id = cmd.stall_id, ?current_end, %lease_end, "extending lease");
        sqlx::query("UPDATE stalls SET status = $1, lease_end = $2 WHERE id = $3")
            .bind(StallStatus::Paid.as_str())
            .bind(lease_end)
            .bind(cmd.stall_id)
            .execute(&mut *tx)
            .await?;

        record_entry(&mut *tx, cmd.vendor_id, TransactionKind::Rent, -cmd.amount).await?;

        tx.commit().await?;
        tracing::info!(
            vendor_id = cmd.vendor_id,
            stall_id = cmd.stall_id,
            amount = %cmd.amount,
            %lease_end,
            "rent paid"
        );
        Ok(RentPayment {
            stall_id: cmd.stall_id,
            lease_end,
        })
    }

    /// Credit the wallet and record a positive `top-up` entry. Returns the new balance.
    pub async fn top_up(pool: &PgPool, cmd: &TopUp) -> Result<WalletBalance, AppError> {
        let mut tx = pool.begin().await?;

        let new_balance: Option<Decimal> = sqlx::query_scalar(
            "UPDATE vendors SET wallet_balance = wallet_balance + $1 WHERE id = $2 RETURNING wallet_balance",
        )
        .bind(cmd.amount)
        .bind(cmd.vendor_id)
        .fetch_optional(&mut *tx)
        .await?;
        let new_balance = new_balance.ok_or_else(|| AppError::NotFound("Vendor not found.".into()))?;

        record_entry(&mut *tx, cmd.vendor_id, TransactionKind::TopUp, cmd.amount).await?;

        tx.commit().await?;
        tracing::info!(vendor_id = cmd.vendor_id, amount = %cmd.amount, %new_balance, "wallet topped up");
        Ok(WalletBalance { new_balance })
    }
}

/// Append one ledger row. An unknown vendor surfaces as not-found.
pub(crate) async fn record_entry(
    conn: &mut PgConnection,
    vendor_id: i32,
    kind: TransactionKind,
    amount: Decimal,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO transactions (vendor_id, type, amount) VALUES ($1, $2, $3)")
        .bind(vendor_id)
        .bind(kind.as_str())
        .bind(amount)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            let fk_violation = e
                .as_database_error()
                .map(|db| db.is_foreign_key_violation())
                .unwrap_or(false);
            if fk_violation {
                AppError::NotFound("Vendor not found.".into())
            } else {
                AppError::Db(e)
            }
        })?;
    Ok(())
}
