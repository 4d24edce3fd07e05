use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::Like;
use crate::modules::post::application::ports::incoming::use_cases::{
    LikePostError, LikePostUseCase,
};
use crate::modules::post::application::ports::outgoing::PostRepository;

pub struct LikePostService<R>
where
    R: PostRepository,
{
    repo: R,
}

impl<R> LikePostService<R>
where
    R: PostRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> LikePostUseCase for LikePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, post_id: Uuid) -> Result<Vec<Like>, LikePostError> {
        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(LikePostError::PostNotFound)?;

        if post.like(user).is_err() {
            warn!(post_id = %post_id, user_id = %user, "Post already liked");
            return Err(LikePostError::AlreadyLiked);
        }

        let saved = self.repo.save_likes(post_id, post.likes).await?;
        Ok(saved.likes)
    }
}
