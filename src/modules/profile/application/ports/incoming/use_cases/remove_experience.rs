use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveExperienceError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for RemoveExperienceError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => RemoveExperienceError::ProfileNotFound,
            other => RemoveExperienceError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait RemoveExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<Profile, RemoveExperienceError>;
}
