use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of profiles: owner name and avatar resolved.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_view_by_user(
        &self,
        owner: UserId,
    ) -> Result<Option<ProfileView>, ProfileQueryError>;

    async fn list_views(&self) -> Result<Vec<ProfileView>, ProfileQueryError>;
}
