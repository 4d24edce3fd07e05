use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::{
    GetPostError, GetPostUseCase,
};
use crate::modules::post::application::ports::outgoing::PostRepository;

pub struct GetPostService<R>
where
    R: PostRepository,
{
    repo: R,
}

impl<R> GetPostService<R>
where
    R: PostRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetPostUseCase for GetPostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Post, GetPostError> {
        self.repo
            .find_by_id(post_id)
            .await?
            .ok_or(GetPostError::PostNotFound)
    }
}
