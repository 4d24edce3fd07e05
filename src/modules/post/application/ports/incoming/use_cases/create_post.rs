use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQueryError;
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for CreatePostError {
    fn from(err: PostRepositoryError) -> Self {
        CreatePostError::RepositoryError(err.to_string())
    }
}

impl From<UserQueryError> for CreatePostError {
    fn from(err: UserQueryError) -> Self {
        CreatePostError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, author: UserId, command: CreatePostCommand)
        -> Result<Post, CreatePostError>;
}
