use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{NewEducation, Profile};
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddEducationError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for AddEducationError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => AddEducationError::ProfileNotFound,
            other => AddEducationError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddEducationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, entry: NewEducation)
        -> Result<Profile, AddEducationError>;
}
