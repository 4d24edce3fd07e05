use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserRepositoryError;
use crate::modules::post::application::ports::outgoing::PostRepositoryError;
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;

/// Each variant names the cascade step that failed; earlier steps stay applied.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Failed to delete posts: {0}")]
    PostsFailed(String),

    #[error("Failed to delete profile: {0}")]
    ProfileFailed(String),

    #[error("Failed to delete user: {0}")]
    UserFailed(String),
}

impl From<PostRepositoryError> for DeleteAccountError {
    fn from(err: PostRepositoryError) -> Self {
        DeleteAccountError::PostsFailed(err.to_string())
    }
}

impl From<ProfileRepositoryError> for DeleteAccountError {
    fn from(err: ProfileRepositoryError) -> Self {
        DeleteAccountError::ProfileFailed(err.to_string())
    }
}

impl From<UserRepositoryError> for DeleteAccountError {
    fn from(err: UserRepositoryError) -> Self {
        DeleteAccountError::UserFailed(err.to_string())
    }
}

#[async_trait]
pub trait DeleteAccountUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<(), DeleteAccountError>;
}
