//! Demo data: fixed markets, categorized stalls with random occupancy, and
//! default collector / admin accounts.
//!
//! Planning is pure (driven by any `Rng`) so the layout can be tested without a
//! database; `seed_markets` writes a plan inside a single transaction.

use crate::auth::hash_password;
use crate::error::AppError;
use crate::migration::{ensure_collectors_table, reset_admins_table, reset_market_schema};
use crate::model::{StallStatus, TransactionKind};
use crate::service::ledger::record_entry;
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub const DEFAULT_PASSWORD: &str = "password123";
/// Lease offset from today for stalls seeded as paid.
pub const PAID_LEASE_DAYS: i64 = 25;
/// Lease offset from today for stalls seeded as unpaid (already lapsed).
pub const UNPAID_LEASE_DAYS: i64 = -5;
const BUSINESS_ID_BASE: u32 = 100_000;

pub struct MarketDef {
    pub name: &'static str,
    pub location: &'static str,
}

pub const MARKETS: &[MarketDef] = &[
    MarketDef { name: "Divisoria Market", location: "Tondo, Manila" },
    MarketDef { name: "Quiapo Market", location: "Quiapo, Manila" },
    MarketDef { name: "Paco Market", location: "Paco, Manila" },
    MarketDef { name: "Sampaloc Market", location: "Sampaloc, Manila" },
];

/// A stall section: code prefix, stall count and base rent.
pub struct StallCategory {
    pub prefix: &'static str,
    pub count: u32,
    pub rent: i64,
}

pub const STALL_CATEGORIES: &[StallCategory] = &[
    StallCategory { prefix: "f", count: 60, rent: 80 }, // meat
    StallCategory { prefix: "s", count: 28, rent: 70 }, // fish
    StallCategory { prefix: "m", count: 60, rent: 50 }, // fruits_vegetables
    StallCategory { prefix: "p", count: 30, rent: 50 }, // dairies_condiments
    StallCategory { prefix: "d", count: 26, rent: 40 }, // dry
];

const FIRST_NAMES: &[&str] = &["Juan", "Maria", "Jose", "Anna", "Pedro", "Clara", "Luis", "Sofia"];
const LAST_NAMES: &[&str] = &["Dela Cruz", "Santos", "Reyes", "Garcia", "Mendoza", "Lim", "Tan", "Villanueva"];

pub const SAMPLE_COLLECTOR: (&str, &str) = ("C-101", "Juan Dela Cruz");
pub const DEFAULT_ADMIN: (&str, &str) = ("admin", "Administrator");

/// Stalls per market across all categories.
pub fn stalls_per_market() -> u32 {
    STALL_CATEGORIES.iter().map(|c| c.count).sum()
}

#[derive(Clone, Debug, PartialEq)]
pub struct VendorSeed {
    pub name: String,
    pub business_id_number: String,
    pub email: String,
    pub wallet_balance: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StallSeed {
    pub market_index: usize,
    pub stall_code: String,
    pub rent_amount: Decimal,
    pub status: StallStatus,
    pub lease_end: Option<NaiveDate>,
    pub vendor: Option<VendorSeed>,
}

/// Generate every stall for every market. The first vendor generated is always unpaid
/// so at least one overdue stall exists.
pub fn plan_stalls<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Vec<StallSeed> {
    let mut stalls = Vec::with_capacity(MARKETS.len() * stalls_per_market() as usize);
    let mut vendor_counter: u32 = 1;
    for market_index in 0..MARKETS.len() {
        for category in STALL_CATEGORIES {
            for n in 1..=category.count {
                let mut status = StallStatus::ALL[rng.gen_range(0..StallStatus::ALL.len())];
                if vendor_counter == 1 {
                    status = StallStatus::Unpaid;
                }
                let (vendor, lease_end) = if status.is_occupied() {
                    let offset = if status == StallStatus::Paid {
                        PAID_LEASE_DAYS
                    } else {
                        UNPAID_LEASE_DAYS
                    };
                    let vendor = random_vendor(rng, vendor_counter);
                    vendor_counter += 1;
                    (Some(vendor), Some(today + Duration::days(offset)))
                } else {
                    (None, None)
                };
                stalls.push(StallSeed {
                    market_index,
                    stall_code: format!("{}{}", category.prefix, n),
                    rent_amount: Decimal::new(category.rent, 0),
                    status,
                    lease_end,
                    vendor,
                });
            }
        }
    }
    stalls
}

fn random_vendor<R: Rng + ?Sized>(rng: &mut R, counter: u32) -> VendorSeed {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Juan");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Dela Cruz");
    // 500.00 ..= 5499.99 in cents
    let cents: i64 = rng.gen_range(50_000..550_000);
    VendorSeed {
        name: format!("{} {}", first, last),
        business_id_number: format!("MNL-BID-{}", BUSINESS_ID_BASE + counter),
        email: format!("vendor{}@market.com", counter),
        wallet_balance: Decimal::new(cents, 2),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub markets: usize,
    pub stalls: usize,
    pub vendors: usize,
}

/// Drop and recreate the market tables, then insert a freshly planned layout.
/// Re-runnable; the whole seed commits or nothing does.
pub async fn seed_markets(pool: &PgPool) -> Result<SeedReport, AppError> {
    let mut tx = pool.begin().await?;
    reset_market_schema(&mut *tx).await?;

    let today: NaiveDate = sqlx::query_scalar("SELECT CURRENT_DATE").fetch_one(&mut *tx).await?;
    let plan = plan_stalls(&mut rand::thread_rng(), today);
    let password = hash_password(DEFAULT_PASSWORD)?;

    tracing::info!(count = MARKETS.len(), "inserting markets");
    let mut market_ids = Vec::with_capacity(MARKETS.len());
    for market in MARKETS {
        let id: i32 = sqlx::query_scalar("INSERT INTO markets (name, location) VALUES ($1, $2) RETURNING id")
            .bind(market.name)
            .bind(market.location)
            .fetch_one(&mut *tx)
            .await?;
        market_ids.push(id);
    }

    tracing::info!(count = plan.len(), "inserting vendors, stalls and transactions");
    let mut report = SeedReport {
        markets: market_ids.len(),
        ..SeedReport::default()
    };
    for stall in &plan {
        let market_id = market_ids[stall.market_index];
        let vendor_id = match &stall.vendor {
            None => None,
            Some(v) => {
                let id: i32 = sqlx::query_scalar(
                    r#"
                    INSERT INTO vendors (name, wallet_balance, business_id_number, email, password)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&v.name)
                .bind(v.wallet_balance)
                .bind(&v.business_id_number)
                .bind(&v.email)
                .bind(&password)
                .fetch_one(&mut *tx)
                .await?;
                report.vendors += 1;
                Some(id)
            }
        };

        sqlx::query(
            r#"
            INSERT INTO stalls (stall_code, market_id, vendor_id, status, rent_amount, lease_end)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&stall.stall_code)
        .bind(market_id)
        .bind(vendor_id)
        .bind(stall.status.as_str())
        .bind(stall.rent_amount)
        .bind(stall.lease_end)
        .execute(&mut *tx)
        .await?;
        report.stalls += 1;

        if let (Some(id), Some(v)) = (vendor_id, &stall.vendor) {
            record_entry(&mut *tx, id, TransactionKind::TopUp, v.wallet_balance).await?;
        }
    }

    tx.commit().await?;
    tracing::info!(?report, "market data seeded");
    Ok(report)
}

/// Create the collectors table if missing and add the sample collector unless present.
pub async fn setup_collectors(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    ensure_collectors_table(&mut *tx).await?;
    let (login, full_name) = SAMPLE_COLLECTOR;
    let inserted = sqlx::query(
        r#"
        INSERT INTO collectors (collector_id, password, full_name)
        VALUES ($1, $2, $3)
        ON CONFLICT (collector_id) DO NOTHING
        "#,
    )
    .bind(login)
    .bind(hash_password(DEFAULT_PASSWORD)?)
    .bind(full_name)
    .execute(&mut *tx)
    .await?
    .rows_affected();
    tx.commit().await?;
    tracing::info!(collector_id = login, inserted = inserted > 0, "collectors ready");
    Ok(())
}

/// Recreate the admins table with the default administrator.
pub async fn setup_admins(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    reset_admins_table(&mut *tx).await?;
    let (username, full_name) = DEFAULT_ADMIN;
    sqlx::query("INSERT INTO admins (username, password, full_name) VALUES ($1, $2, $3)")
        .bind(username)
        .bind(hash_password(DEFAULT_PASSWORD)?)
        .bind(full_name)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    tracing::info!(username, "default admin created");
    Ok(())
}
