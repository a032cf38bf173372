//! Runtime settings read from the environment (`.env` is loaded by the binaries).

use crate::error::ConfigError;
use std::collections::HashMap;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
/// Business id of the vendor served by `GET /api/vendors/me`.
pub const DEFAULT_DEMO_BUSINESS_ID: &str = "MNL-BID-100001";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub token_ttl_secs: u64,
    pub demo_business_id: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_map(&vars)
    }

    /// Build settings from a key/value source. Empty values count as unset.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL")
            .ok_or(ConfigError::Missing("DATABASE_URL"))?
            .to_string();
        let jwt_secret = get("JWT_SECRET")
            .ok_or(ConfigError::Missing("JWT_SECRET"))?
            .to_string();
        let bind_addr = get("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR).to_string();
        let max_connections = parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let token_ttl_secs = parse_or(get("TOKEN_TTL_SECS"), "TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        let demo_business_id = get("DEMO_BUSINESS_ID")
            .unwrap_or(DEFAULT_DEMO_BUSINESS_ID)
            .to_string();

        Ok(Settings {
            database_url,
            jwt_secret,
            bind_addr,
            max_connections,
            token_ttl_secs,
            demo_business_id,
        })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
            key,
            value: v.to_string(),
        }),
    }
}
