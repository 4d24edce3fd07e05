use anyhow::{Context, Result};
use std::env;

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub run_migrations: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_or("PORT", 5000u16)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 20u32)?;
        let db_min_connections = parse_or("DB_MIN_CONNECTIONS", 2u32)?;
        let run_migrations = parse_or("RUN_MIGRATIONS", true)?;

        anyhow::ensure!(
            db_min_connections <= db_max_connections,
            "DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS"
        );

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            run_migrations,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid {} value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
