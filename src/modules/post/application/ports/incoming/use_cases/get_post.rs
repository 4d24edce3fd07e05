use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for GetPostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => GetPostError::PostNotFound,
            other => GetPostError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Post, GetPostError>;
}
