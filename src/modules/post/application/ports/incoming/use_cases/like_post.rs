use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::Like;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for LikePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => LikePostError::PostNotFound,
            other => LikePostError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait LikePostUseCase: Send + Sync {
    async fn execute(&self, user: UserId, post_id: Uuid) -> Result<Vec<Like>, LikePostError>;
}
