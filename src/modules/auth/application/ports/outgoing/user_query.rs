// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

/// Read model of a user. Carries the hash because login needs it;
/// handlers never serialize this type directly.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password_hash: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
}
