use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Removes the user row. Deleting an absent user is not an error.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
