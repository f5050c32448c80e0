use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_FILE: &str = "data/portfolio.json";
const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 7;
const MAX_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Where portfolio content is persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    File(PathBuf),
    Database(String),
    Memory,
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub admin_password: String,
    pub storage: StorageConfig,
    /// Marks the session cookie `Secure`.
    pub production: bool,
    pub session_ttl: Duration,
    pub static_dir: Option<PathBuf>,
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let admin_password = var("ADMIN_PASSWORD").ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?;

        let storage = match var("STORAGE_BACKEND").as_deref().unwrap_or("file") {
            "file" => StorageConfig::File(
                var("DATA_FILE")
                    .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
                    .into(),
            ),
            "database" => StorageConfig::Database(
                var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            ),
            "memory" => StorageConfig::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "STORAGE_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        // Between one second and one year.
        let session_ttl = match var("SESSION_TTL_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if (1..=MAX_SESSION_TTL_SECS).contains(&secs) => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "SESSION_TTL_SECS",
                        value,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        };

        Ok(Self {
            port,
            admin_password,
            storage,
            production: var("APP_ENV").is_some_and(|env| env == "production"),
            session_ttl,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            allowed_origin: var("ALLOWED_ORIGIN"),
        })
    }
}
