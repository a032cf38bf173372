//! Market stalls: leasing, rent payment and reporting backend for public markets.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::app;
pub use state::AppState;
pub use store::{connect, connect_lazy, ensure_database_exists};

/// Install the `tracing` subscriber used by the binaries. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("market_stalls=info,seed=info,tower_http=info")),
        )
        .init();
}
