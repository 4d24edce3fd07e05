use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::{Comment, Like, Post};

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub owner: UserId,
    pub text: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError>;

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError>;

    async fn list_newest_first(&self) -> Result<Vec<Post>, PostRepositoryError>;

    /// `NotFound` when no row was removed.
    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;

    /// Replaces the whole likes list and returns the stored post.
    async fn save_likes(&self, post_id: Uuid, likes: Vec<Like>)
        -> Result<Post, PostRepositoryError>;

    /// Replaces the whole comments list and returns the stored post.
    async fn save_comments(
        &self,
        post_id: Uuid,
        comments: Vec<Comment>,
    ) -> Result<Post, PostRepositoryError>;

    /// Removes every post written by `owner`, returning how many went.
    async fn delete_by_owner(&self, owner: UserId) -> Result<u64, PostRepositoryError>;
}
