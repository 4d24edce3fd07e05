use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    RemoveEducationError, RemoveEducationUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct RemoveEducationService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> RemoveEducationService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RemoveEducationUseCase for RemoveEducationService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        education_id: Uuid,
    ) -> Result<Profile, RemoveEducationError> {
        let mut profile = self
            .repo
            .find_by_user(owner)
            .await?
            .ok_or(RemoveEducationError::ProfileNotFound)?;

        profile
            .remove_education(education_id)
            .ok_or(RemoveEducationError::EducationNotFound)?;

        Ok(self.repo.save_education(owner, profile.education).await?)
    }
}
