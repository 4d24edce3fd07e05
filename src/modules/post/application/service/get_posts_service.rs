use async_trait::async_trait;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::{
    GetPostsError, GetPostsUseCase,
};
use crate::modules::post::application::ports::outgoing::PostRepository;

pub struct GetPostsService<R>
where
    R: PostRepository,
{
    repo: R,
}

impl<R> GetPostsService<R>
where
    R: PostRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetPostsUseCase for GetPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Post>, GetPostsError> {
        Ok(self.repo.list_newest_first().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemoryStore;

    #[tokio::test]
    async fn newest_post_comes_first() {
        let store = InMemoryStore::default();
        let author = store.seed_user("Jane", "jane@example.com");
        store.seed_post(author, "older");
        store.seed_post(author, "newer");

        let posts = GetPostsService::new(store).execute().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text, "newer");
        assert_eq!(posts[1].text, "older");
    }

    #[tokio::test]
    async fn failure_is_reported() {
        let store = InMemoryStore::default();
        store.fail_with("down");

        let result = GetPostsService::new(store).execute().await;

        assert!(matches!(result, Err(GetPostsError::RepositoryError(_))));
    }
}
