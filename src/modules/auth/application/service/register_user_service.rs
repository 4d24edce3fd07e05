use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::{gravatar_url, normalize_email};
use crate::auth::application::ports::incoming::use_cases::{
    AuthToken, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserRepository,
};

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repo: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repo: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repo,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthToken, RegisterUserError> {
        let email = normalize_email(&command.email);

        if self.query.find_by_email(&email).await?.is_some() {
            return Err(RegisterUserError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash_password(&command.password).await?;

        // A concurrent registration can still win the race; the unique
        // index turns that into UserAlreadyExists.
        let user = self
            .repo
            .create_user(CreateUserData {
                name: command.name.trim().to_string(),
                avatar: gravatar_url(&email),
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        let token = self.tokens.generate_access_token(user.id.value())?;
        Ok(AuthToken { token })
    }
}
