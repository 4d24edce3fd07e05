use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    Education, Experience, Profile, ProfileFields,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Profile already exists for this user")]
    AlreadyExists,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of profiles, keyed by the owning user.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, owner: UserId) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn create_profile(
        &self,
        owner: UserId,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Writes only the optional fields that are `Some`; `status`, `skills`
    /// and `social` are always written.
    async fn update_profile(
        &self,
        owner: UserId,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn save_experience(
        &self,
        owner: UserId,
        experience: Vec<Experience>,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn save_education(
        &self,
        owner: UserId,
        education: Vec<Education>,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Deleting a user without a profile is not an error.
    async fn delete_by_user(&self, owner: UserId) -> Result<(), ProfileRepositoryError>;
}
