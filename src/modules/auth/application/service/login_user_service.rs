use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::normalize_email;
use crate::auth::application::ports::incoming::use_cases::{
    AuthToken, LoginUserCommand, LoginUserError, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginUserCommand) -> Result<AuthToken, LoginUserError> {
        let email = normalize_email(&command.email);

        let user = match self.query.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown email");
                return Err(LoginUserError::InvalidCredentials);
            }
        };

        if !self
            .hasher
            .verify_password(&command.password, &user.password_hash)
            .await?
        {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(LoginUserError::InvalidCredentials);
        }

        info!(user_id = %user.id, "User logged in");

        let token = self.tokens.generate_access_token(user.id.value())?;
        Ok(AuthToken { token })
    }
}
