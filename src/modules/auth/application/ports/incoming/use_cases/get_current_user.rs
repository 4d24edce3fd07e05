use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQueryError, UserQueryResult};

/// A user as shown to clients: everything but the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<UserQueryResult> for CurrentUser {
    fn from(user: UserQueryResult) -> Self {
        Self {
            id: user.id.value(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            date: user.date,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for GetCurrentUserError {
    fn from(err: UserQueryError) -> Self {
        GetCurrentUserError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<CurrentUser, GetCurrentUserError>;
}
