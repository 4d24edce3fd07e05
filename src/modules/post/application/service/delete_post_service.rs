use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::incoming::use_cases::{
    DeletePostError, DeletePostUseCase,
};
use crate::modules::post::application::ports::outgoing::PostRepository;

pub struct DeletePostService<R>
where
    R: PostRepository,
{
    repo: R,
}

impl<R> DeletePostService<R>
where
    R: PostRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeletePostUseCase for DeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, requester: UserId, post_id: Uuid) -> Result<(), DeletePostError> {
        let post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(DeletePostError::PostNotFound)?;

        if !post.is_owned_by(requester) {
            warn!(post_id = %post_id, user_id = %requester, "Rejected delete of another user's post");
            return Err(DeletePostError::NotAuthorized);
        }

        self.repo.delete_post(post_id).await?;
        info!(post_id = %post_id, user_id = %requester, "Post removed");
        Ok(())
    }
}
