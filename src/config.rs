use std::env;

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Mongo,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    pub mongodb_uri: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
    pub token_secret: String,
    pub environment: Environment,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("STORE").as_deref() {
            None | Some("mongo") => StoreKind::Mongo,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE",
                    reason: format!("expected 'mongo' or 'memory', got '{}'", other),
                });
            }
        };

        let mongodb_uri = match (lookup("MONGODB_URI"), store) {
            (Some(uri), _) => uri,
            (None, StoreKind::Memory) => String::new(),
            (None, StoreKind::Mongo) => {
                let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
                let pass = lookup("DB_PASS").ok_or(ConfigError::Missing("DB_PASS"))?;
                let cluster = lookup("DB_CLUSTER").ok_or(ConfigError::Missing("DB_CLUSTER"))?;
                format!(
                    "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
                    user, pass, cluster
                )
            }
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: format!("{}", e),
            })?,
            None => {
                info!("PORT not set, using default: 5000");
                5000
            }
        };

        let token_secret = lookup("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("ACCESS_TOKEN_SECRET"))?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173,http://localhost:5174".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            store,
            mongodb_uri,
            db_name: lookup("DB_NAME").unwrap_or_else(|| "blogsDB".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            token_secret,
            environment: Environment::parse(lookup("NODE_ENV").as_deref()),
            cors_origins,
        })
    }
}
