use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::outgoing::ProfileQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentProfileError {
    #[error("There is no profile for this user")]
    ProfileNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ProfileQueryError> for GetCurrentProfileError {
    fn from(err: ProfileQueryError) -> Self {
        GetCurrentProfileError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetCurrentProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<ProfileView, GetCurrentProfileError>;
}
