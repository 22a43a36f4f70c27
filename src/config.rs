use std::collections::HashMap;
use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings read from the environment (and `.env`, loaded by `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// `DATABASE_URL` wins; otherwise the URL is assembled from the
    /// `DB_HOST`/`DB_PORT`/`POSTGRES_*` variables used by the compose setup.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| vars.get(name).filter(|v| !v.is_empty()).cloned();
        let or = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                or("POSTGRES_USER", "postgres"),
                or("POSTGRES_PASSWORD", "postgres"),
                or("DB_HOST", "localhost"),
                parse_number::<u16>("DB_PORT", get("DB_PORT"), 5432)?,
                or("POSTGRES_DB", "storefront"),
            ),
        };

        let (port_var, port_value) = match get("PORT") {
            Some(v) => ("PORT", Some(v)),
            None => ("API_PORT", get("API_PORT")),
        };

        Ok(Self {
            database_url,
            host: or("HOST", "0.0.0.0"),
            port: parse_number(port_var, port_value, 3000)?,
            pool_size: parse_number("DB_POOL_SIZE", get("DB_POOL_SIZE"), 10)?,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value: v }),
    }
}
