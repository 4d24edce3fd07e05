use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;

/// Raw profile form. Blank optional values count as not supplied;
/// `skills` is the comma separated list as typed.
#[derive(Debug, Clone, Default)]
pub struct UpsertProfileCommand {
    pub status: String,
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for UpsertProfileError {
    fn from(err: ProfileRepositoryError) -> Self {
        UpsertProfileError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, UpsertProfileError>;
}
