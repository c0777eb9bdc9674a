use std::{env::var, path::PathBuf};

use dotenvy::dotenv;
use thiserror::Error;

pub const POSTGRES_PORT: u16 = 5432;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("An error occured while parsing {0} env param")]
    Invalid(&'static str),
    #[error("An error occured while getting {0} env param")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub scheme: String,
    pub public_host: String,
    pub static_dir: PathBuf,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    InMemory,
    Postgres(PostgresConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub database: String,
    pub user: String,
    pub password: String,
    pub host: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = or("PORT", "5000")
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let storage = if lookup("TESTING").as_deref() == Some("true") {
            StorageConfig::InMemory
        } else {
            StorageConfig::Postgres(PostgresConfig {
                database: lookup("POSTGRES_DB").ok_or(ConfigError::Missing("POSTGRES_DB"))?,
                user: or("POSTGRES_USER", "postgres"),
                password: or("POSTGRES_PASSWORD", ""),
                host: or("POSTGRES_HOST", "postgres"),
            })
        };

        Ok(Config {
            host: or("HOST", "0.0.0.0"),
            port,
            scheme: or("SCHEME", "http"),
            public_host: or("PUBLIC_HOST", "localhost"),
            static_dir: PathBuf::from(or("STATIC_DIR", "static")),
            storage,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.public_host, self.port)
    }
}
