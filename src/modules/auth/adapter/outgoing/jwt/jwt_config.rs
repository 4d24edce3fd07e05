use anyhow::{ensure, Context, Result};
use std::env;

use crate::shared::config::parse_or;

const MAX_ACCESS_EXPIRY: i64 = 7 * 24 * 3600;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        // HS256 requires at least 32 bytes
        ensure!(
            secret_key.len() >= 32,
            "JWT_SECRET must be at least 32 characters long for HS256 algorithm"
        );

        let access_token_expiry: i64 = parse_or("JWT_ACCESS_EXPIRY", 360_000)?;
        ensure!(
            access_token_expiry > 0 && access_token_expiry <= MAX_ACCESS_EXPIRY,
            "JWT_ACCESS_EXPIRY must be between 1 and {} seconds (7 days)",
            MAX_ACCESS_EXPIRY
        );

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "devconnector".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
