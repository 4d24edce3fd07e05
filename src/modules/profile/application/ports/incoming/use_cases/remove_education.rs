use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveEducationError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Education not found")]
    EducationNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for RemoveEducationError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => RemoveEducationError::ProfileNotFound,
            other => RemoveEducationError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait RemoveEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        education_id: Uuid,
    ) -> Result<Profile, RemoveEducationError>;
}
