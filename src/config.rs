//! Server configuration from environment variables (a `.env` file is loaded by the binary).

use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/movies";
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Where movie records live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    /// Process-local map; contents are lost on restart.
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageKind::Postgres),
            "memory" => Ok(StorageKind::Memory),
            _ => Err(ConfigError::UnknownStorage(s.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub storage: StorageKind,
    /// Mount point for the movie routes, e.g. `/api/v1`. Empty mounts them at the root.
    pub api_prefix: String,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `HOST`, `PORT`, `DB_MAX_CONNECTIONS`, `MOVIES_STORAGE`,
    /// `API_PREFIX` and `MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let host = parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5u32)?;
        let storage = match lookup("MOVIES_STORAGE") {
            Some(s) => s.parse()?,
            None => StorageKind::Postgres,
        };
        let api_prefix = normalize_prefix(lookup("API_PREFIX").as_deref().unwrap_or(""))?;
        let max_body_bytes = parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            storage,
            api_prefix,
            max_body_bytes,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            max_connections: 5,
            storage: StorageKind::Postgres,
            api_prefix: String::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

/// `api/v1/` -> `/api/v1`; `/` and blank -> empty. Wildcards cannot be nested under.
fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.contains('*') {
        return Err(ConfigError::InvalidValue {
            key: "API_PREFIX",
            value: raw.to_string(),
        });
    }
    if trimmed.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("/{}", trimmed))
    }
}
