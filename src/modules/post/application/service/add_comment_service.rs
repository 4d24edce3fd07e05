use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::post::application::domain::entities::Comment;
use crate::modules::post::application::ports::incoming::use_cases::{
    AddCommentCommand, AddCommentError, AddCommentUseCase,
};
use crate::modules::post::application::ports::outgoing::PostRepository;

pub struct AddCommentService<R, Q>
where
    R: PostRepository,
    Q: UserQuery,
{
    repo: R,
    users: Q,
}

impl<R, Q> AddCommentService<R, Q>
where
    R: PostRepository,
    Q: UserQuery,
{
    pub fn new(repo: R, users: Q) -> Self {
        Self { repo, users }
    }
}

#[async_trait]
impl<R, Q> AddCommentUseCase for AddCommentService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        post_id: Uuid,
        command: AddCommentCommand,
    ) -> Result<Vec<Comment>, AddCommentError> {
        let user = self
            .users
            .find_by_id(author)
            .await?
            .ok_or(AddCommentError::UserNotFound)?;

        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(AddCommentError::PostNotFound)?;

        post.add_comment(Comment::new(
            author,
            command.text.trim().to_string(),
            user.name,
            user.avatar,
        ));

        let saved = self.repo.save_comments(post_id, post.comments).await?;
        Ok(saved.comments)
    }
}
