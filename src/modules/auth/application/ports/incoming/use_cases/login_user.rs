use async_trait::async_trait;

use super::register_user::AuthToken;
use crate::auth::application::ports::outgoing::{HashError, TokenError, UserQueryError};

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    /// Unknown email and wrong password are indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for LoginUserError {
    fn from(err: UserQueryError) -> Self {
        LoginUserError::RepositoryError(err.to_string())
    }
}

impl From<HashError> for LoginUserError {
    fn from(err: HashError) -> Self {
        LoginUserError::HashingFailed(err.to_string())
    }
}

impl From<TokenError> for LoginUserError {
    fn from(err: TokenError) -> Self {
        LoginUserError::TokenFailed(err.to_string())
    }
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginUserCommand) -> Result<AuthToken, LoginUserError>;
}
