use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::{Comment, PostRuleError};
use crate::modules::post::application::ports::incoming::use_cases::{
    RemoveCommentError, RemoveCommentUseCase,
};
use crate::modules::post::application::ports::outgoing::PostRepository;

pub struct RemoveCommentService<R>
where
    R: PostRepository,
{
    repo: R,
}

impl<R> RemoveCommentService<R>
where
    R: PostRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RemoveCommentUseCase for RemoveCommentService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>, RemoveCommentError> {
        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(RemoveCommentError::PostNotFound)?;

        match post.remove_comment(comment_id, requester) {
            Ok(_) => {}
            Err(PostRuleError::NotCommentAuthor) => {
                warn!(post_id = %post_id, comment_id = %comment_id, user_id = %requester, "Rejected removal of another user's comment");
                return Err(RemoveCommentError::NotAuthorized);
            }
            Err(_) => return Err(RemoveCommentError::CommentNotFound),
        }

        let saved = self.repo.save_comments(post_id, post.comments).await?;
        Ok(saved.comments)
    }
}
