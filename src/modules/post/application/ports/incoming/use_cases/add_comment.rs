use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQueryError;
use crate::modules::post::application::domain::entities::Comment;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for AddCommentError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => AddCommentError::PostNotFound,
            other => AddCommentError::RepositoryError(other.to_string()),
        }
    }
}

impl From<UserQueryError> for AddCommentError {
    fn from(err: UserQueryError) -> Self {
        AddCommentError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        post_id: Uuid,
        command: AddCommentCommand,
    ) -> Result<Vec<Comment>, AddCommentError>;
}
