use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{NewExperience, Profile};
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddExperienceError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for AddExperienceError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => AddExperienceError::ProfileNotFound,
            other => AddExperienceError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        entry: NewExperience,
    ) -> Result<Profile, AddExperienceError>;
}
