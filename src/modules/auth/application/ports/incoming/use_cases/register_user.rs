use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{
    HashError, TokenError, UserQueryError, UserRepositoryError,
};

/// Already validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of register and login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthToken {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for RegisterUserError {
    fn from(err: UserQueryError) -> Self {
        RegisterUserError::RepositoryError(err.to_string())
    }
}

impl From<UserRepositoryError> for RegisterUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
            UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
        }
    }
}

impl From<HashError> for RegisterUserError {
    fn from(err: HashError) -> Self {
        RegisterUserError::HashingFailed(err.to_string())
    }
}

impl From<TokenError> for RegisterUserError {
    fn from(err: TokenError) -> Self {
        RegisterUserError::TokenFailed(err.to_string())
    }
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthToken, RegisterUserError>;
}
