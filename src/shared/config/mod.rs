//! Application configuration module
//!
//! `AppConfig` is the single object holding everything the server needs at
//! startup: where to listen, which database to open, and how to sign and
//! check tokens. It is built once in `main` and handed to the router; nothing
//! reads configuration from globals after that.
//!
//! # Sources
//!
//! [`AppConfig::from_env`] layers three sources, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file named by `BLOG_CONFIG` (optional)
//! 3. Environment variables (a `.env` file is loaded first if present)

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// HMAC secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Lifetime of an issued token, in minutes
    pub token_ttl_minutes: i64,
    /// bcrypt work factor for password hashes
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url)
            .field("max_connections", &self.max_connections)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `.env`, an optional TOML file and the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let file = match std::env::var("BLOG_CONFIG") {
            Ok(path) => Some(FileConfig::load(Path::new(&path))?),
            Err(_) => None,
        };

        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with an environment lookup
    pub fn from_sources<F>(file: Option<FileConfig>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let mut builder = AppConfig::builder();

        if let Some(addr) = env("BIND_ADDR").or(file.bind_addr) {
            builder = builder.bind_addr(parse_value("BIND_ADDR", &addr)?);
        }
        if let Some(url) = env("DATABASE_URL").or(file.database_url) {
            builder = builder.database_url(url);
        }
        if let Some(max) = env("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_value("DATABASE_MAX_CONNECTIONS", &max)?);
        } else if let Some(max) = file.max_connections {
            builder = builder.max_connections(max);
        }
        if let Some(secret) = env("JWT_SECRET")
            .or_else(|| env("SECRET_KEY"))
            .or(file.jwt_secret)
        {
            builder = builder.jwt_secret(secret);
        }
        if let Some(ttl) = env("TOKEN_TTL_MINUTES") {
            builder = builder.token_ttl_minutes(parse_value("TOKEN_TTL_MINUTES", &ttl)?);
        } else if let Some(ttl) = file.token_ttl_minutes {
            builder = builder.token_ttl_minutes(ttl);
        }
        if let Some(cost) = env("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        } else if let Some(cost) = file.bcrypt_cost {
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::invalid("TOKEN_TTL_MINUTES", "must be positive"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", "must be at least 1"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    bind_addr: Option<SocketAddr>,
    database_url: Option<String>,
    max_connections: Option<u32>,
    jwt_secret: Option<String>,
    token_ttl_minutes: Option<i64>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = Some(minutes);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration, filling defaults and validating the result
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let bind_addr = match self.bind_addr {
            Some(addr) => addr,
            None => parse_value("BIND_ADDR", DEFAULT_BIND_ADDR)?,
        };

        let config = AppConfig {
            bind_addr,
            database_url: self.database_url.unwrap_or_else(default_database_url),
            max_connections: self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl_minutes: self.token_ttl_minutes.unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// On-disk TOML representation; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bind_addr: Option<String>,
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
    pub jwt_secret: Option<String>,
    pub token_ttl_minutes: Option<i64>,
    pub bcrypt_cost: Option<u32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string()))
}

/// `sqlite://<platform data dir>/blog/blog.db`, falling back to the temp dir
fn default_database_url() -> String {
    let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    path.push("blog");
    path.push("blog.db");
    format!("sqlite://{}", path.to_string_lossy())
}
