use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase,
};
use crate::modules::post::application::ports::outgoing::{CreatePostData, PostRepository};

pub struct CreatePostService<R, Q>
where
    R: PostRepository,
    Q: UserQuery,
{
    repo: R,
    users: Q,
}

impl<R, Q> CreatePostService<R, Q>
where
    R: PostRepository,
    Q: UserQuery,
{
    pub fn new(repo: R, users: Q) -> Self {
        Self { repo, users }
    }
}

#[async_trait]
impl<R, Q> CreatePostUseCase for CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        command: CreatePostCommand,
    ) -> Result<Post, CreatePostError> {
        let user = self
            .users
            .find_by_id(author)
            .await?
            .ok_or(CreatePostError::UserNotFound)?;

        let post = self
            .repo
            .create_post(CreatePostData {
                owner: author,
                text: command.text.trim().to_string(),
                name: user.name,
                avatar: user.avatar,
            })
            .await?;

        info!(post_id = %post.id, user_id = %author, "Post created");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemoryStore;
    use uuid::Uuid;

    #[tokio::test]
    async fn copies_author_name_and_avatar() {
        let store = InMemoryStore::default();
        let author = store.seed_user("Jane", "jane@example.com");

        let post = CreatePostService::new(store.clone(), store.clone())
            .execute(
                author,
                CreatePostCommand {
                    text: " hello ".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(post.text, "hello");
        assert_eq!(post.user, author.value());
        assert_eq!(post.name, "Jane");
        assert_eq!(post.avatar, store.users()[0].avatar);
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[tokio::test]
    async fn unknown_author_is_rejected() {
        let store = InMemoryStore::default();

        let result = CreatePostService::new(store.clone(), store.clone())
            .execute(
                UserId::from(Uuid::new_v4()),
                CreatePostCommand {
                    text: "hello".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(CreatePostError::UserNotFound)));
        assert!(store.posts().is_empty());
    }
}
