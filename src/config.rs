//! Environment-derived configuration, read once at startup.
//! Used by: main, state, health::database.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 80;
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "admin";
const DEFAULT_DB_PASSWORD: &str = "password";
const DEFAULT_DB_NAME: &str = "webapp";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_PUBLIC_DIR: &str = "public";

pub const DEFAULT_LOG_FILTER: &str = "infra_health_api=info,tower_http=info";

/// Connection parameters for the database behind `/api/health`.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.into(),
            user: DEFAULT_DB_USER.into(),
            password: DEFAULT_DB_PASSWORD.into(),
            database: DEFAULT_DB_NAME.into(),
            port: DEFAULT_DB_PORT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Value of `NODE_ENV`; only reported at startup.
    pub environment: String,
    pub public_dir: PathBuf,
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.into(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let text = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_owned());

        Ok(Self {
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            environment: text("NODE_ENV", DEFAULT_ENVIRONMENT),
            public_dir: PathBuf::from(text("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
            database: DatabaseConfig {
                host: text("DB_HOST", DEFAULT_DB_HOST),
                user: text("DB_USER", DEFAULT_DB_USER),
                password: text("DB_PASSWORD", DEFAULT_DB_PASSWORD),
                database: text("DB_NAME", DEFAULT_DB_NAME),
                port: parse_or(get("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} must be a port number, got {:?}", key, v))),
    }
}
