use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::Comment;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Comment doesn't exist")]
    CommentNotFound,

    #[error("User not authorized")]
    NotAuthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for RemoveCommentError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => RemoveCommentError::PostNotFound,
            other => RemoveCommentError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait RemoveCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>, RemoveCommentError>;
}
