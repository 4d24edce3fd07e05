use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid, // User ID
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
