//! Schema DDL. Market tables are dropped and recreated on every seed; the
//! collectors table is created only when missing; admins is always recreated.

use crate::error::AppError;
use sqlx::PgConnection;

const DROP_MARKET_TABLES: &str = "DROP TABLE IF EXISTS transactions, stalls, vendors, markets CASCADE";

const MARKET_TABLES: &[&str] = &[
    r#"
    CREATE TABLE markets (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL UNIQUE,
        location VARCHAR(100)
    )
    "#,
    r#"
    CREATE TABLE vendors (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        business_id_number VARCHAR(50) NOT NULL UNIQUE,
        email VARCHAR(100) UNIQUE,
        password VARCHAR(255),
        wallet_balance NUMERIC(10, 2) NOT NULL DEFAULT 0.00
    )
    "#,
    r#"
    CREATE TABLE stalls (
        id SERIAL PRIMARY KEY,
        stall_code VARCHAR(20) NOT NULL,
        market_id INTEGER NOT NULL REFERENCES markets(id),
        vendor_id INTEGER NULL REFERENCES vendors(id),
        status VARCHAR(20) NOT NULL CHECK (status IN ('paid', 'unpaid', 'vacant')),
        rent_amount NUMERIC(10, 2) NOT NULL,
        lease_end DATE,
        UNIQUE (stall_code, market_id),
        CONSTRAINT stalls_vacant_iff_no_vendor CHECK ((status = 'vacant') = (vendor_id IS NULL))
    )
    "#,
    r#"
    CREATE TABLE transactions (
        id SERIAL PRIMARY KEY,
        vendor_id INTEGER NOT NULL REFERENCES vendors(id),
        type VARCHAR(50) NOT NULL CHECK (type IN ('top-up', 'rent')),
        amount NUMERIC(10, 2) NOT NULL,
        transaction_date TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    "CREATE INDEX stalls_market_status_idx ON stalls (market_id, status)",
    "CREATE INDEX transactions_vendor_date_idx ON transactions (vendor_id, transaction_date DESC)",
];

const CREATE_COLLECTORS: &str = r#"
    CREATE TABLE IF NOT EXISTS collectors (
        id SERIAL PRIMARY KEY,
        collector_id VARCHAR(50) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        full_name VARCHAR(100) NOT NULL,
        created_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
    )
"#;

const DROP_ADMINS: &str = "DROP TABLE IF EXISTS admins CASCADE";

const CREATE_ADMINS: &str = r#"
    CREATE TABLE admins (
        id SERIAL PRIMARY KEY,
        username VARCHAR(50) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        full_name VARCHAR(100) NOT NULL,
        created_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Drop and recreate markets, vendors, stalls and transactions. Run inside a transaction.
pub async fn reset_market_schema(conn: &mut PgConnection) -> Result<(), AppError> {
    tracing::debug!("dropping market tables");
    sqlx::query(DROP_MARKET_TABLES).execute(&mut *conn).await?;
    for ddl in MARKET_TABLES {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

pub async fn ensure_collectors_table(conn: &mut PgConnection) -> Result<(), AppError> {
    sqlx::query(CREATE_COLLECTORS).execute(&mut *conn).await?;
    Ok(())
}

pub async fn reset_admins_table(conn: &mut PgConnection) -> Result<(), AppError> {
    sqlx::query(DROP_ADMINS).execute(&mut *conn).await?;
    sqlx::query(CREATE_ADMINS).execute(&mut *conn).await?;
    Ok(())
}
