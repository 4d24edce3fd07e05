use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::post::application::ports::outgoing::PostRepository;
use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteAccountError, DeleteAccountUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

/// Removes a user's posts, then their profile, then the user.
pub struct DeleteAccountService<P, R, U>
where
    P: PostRepository,
    R: ProfileRepository,
    U: UserRepository,
{
    posts: P,
    profiles: R,
    users: U,
}

impl<P, R, U> DeleteAccountService<P, R, U>
where
    P: PostRepository,
    R: ProfileRepository,
    U: UserRepository,
{
    pub fn new(posts: P, profiles: R, users: U) -> Self {
        Self {
            posts,
            profiles,
            users,
        }
    }
}

#[async_trait]
impl<P, R, U> DeleteAccountUseCase for DeleteAccountService<P, R, U>
where
    P: PostRepository + Send + Sync,
    R: ProfileRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<(), DeleteAccountError> {
        let removed_posts = self.posts.delete_by_owner(owner).await?;
        self.profiles.delete_by_user(owner).await?;
        self.users.delete_user(owner).await?;

        info!(user_id = %owner, removed_posts, "Account deleted");
        Ok(())
    }
}
