use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::Like;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnlikePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Post has not yet been liked")]
    NotLiked,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for UnlikePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => UnlikePostError::PostNotFound,
            other => UnlikePostError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UnlikePostUseCase: Send + Sync {
    async fn execute(&self, user: UserId, post_id: Uuid) -> Result<Vec<Like>, UnlikePostError>;
}
