//! Populate the database with demo data.
//!
//! Usage: `seed [all|markets|collectors|admins]` (default `all`).

use market_stalls::seed::{seed_markets, setup_admins, setup_collectors};
use market_stalls::{connect, ensure_database_exists, init_tracing, Settings};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Target {
    All,
    Markets,
    Collectors,
    Admins,
}

impl std::str::FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Target::All),
            "markets" => Ok(Target::Markets),
            "collectors" => Ok(Target::Collectors),
            "admins" => Ok(Target::Admins),
            other => Err(format!(
                "unknown seed target '{}' (expected all, markets, collectors or admins)",
                other
            )),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let target: Target = std::env::args().nth(1).as_deref().unwrap_or("all").parse()?;
    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(&settings).await?;

    if matches!(target, Target::All | Target::Markets) {
        let report = seed_markets(&pool).await?;
        tracing::info!(
            markets = report.markets,
            stalls = report.stalls,
            vendors = report.vendors,
            "database seeded"
        );
    }
    if matches!(target, Target::All | Target::Collectors) {
        setup_collectors(&pool).await?;
    }
    if matches!(target, Target::All | Target::Admins) {
        setup_admins(&pool).await?;
    }

    pool.close().await;
    Ok(())
}
