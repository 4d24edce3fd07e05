use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::outgoing::ProfileQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileByUserError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ProfileQueryError> for GetProfileByUserError {
    fn from(err: ProfileQueryError) -> Self {
        GetProfileByUserError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetProfileByUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, GetProfileByUserError>;
}
