use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::outgoing::ProfileQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfilesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ProfileQueryError> for GetProfilesError {
    fn from(err: ProfileQueryError) -> Self {
        GetProfilesError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileView>, GetProfilesError>;
}
