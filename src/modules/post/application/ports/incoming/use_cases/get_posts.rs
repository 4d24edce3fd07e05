use async_trait::async_trait;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for GetPostsError {
    fn from(err: PostRepositoryError) -> Self {
        GetPostsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Post>, GetPostsError>;
}
