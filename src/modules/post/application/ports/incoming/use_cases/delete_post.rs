use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("User not authorized")]
    NotAuthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for DeletePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => DeletePostError::PostNotFound,
            other => DeletePostError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, requester: UserId, post_id: Uuid) -> Result<(), DeletePostError>;
}
