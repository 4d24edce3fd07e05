use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Like {
    pub user: Uuid,
}

/// `name` and `avatar` are copied from the author when the comment is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: UserId, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.value(),
            text,
            name,
            avatar,
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostRuleError {
    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,

    #[error("Comment doesn't exist")]
    CommentNotFound,

    #[error("User not authorized")]
    NotCommentAuthor,
}

impl Post {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user == user.value()
    }

    pub fn is_liked_by(&self, user: UserId) -> bool {
        self.likes.iter().any(|l| l.user == user.value())
    }

    /// At most one like per user; the newest like is listed first.
    pub fn like(&mut self, user: UserId) -> Result<(), PostRuleError> {
        if self.is_liked_by(user) {
            return Err(PostRuleError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user: user.value() });
        Ok(())
    }

    pub fn unlike(&mut self, user: UserId) -> Result<(), PostRuleError> {
        let index = self
            .likes
            .iter()
            .position(|l| l.user == user.value())
            .ok_or(PostRuleError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Only the comment's author may remove it.
    pub fn remove_comment(
        &mut self,
        comment_id: Uuid,
        requester: UserId,
    ) -> Result<Comment, PostRuleError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(PostRuleError::CommentNotFound)?;

        if self.comments[index].user != requester.value() {
            return Err(PostRuleError::NotCommentAuthor);
        }

        Ok(self.comments.remove(index))
    }
}
