use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    RemoveExperienceError, RemoveExperienceUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct RemoveExperienceService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> RemoveExperienceService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RemoveExperienceUseCase for RemoveExperienceService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<Profile, RemoveExperienceError> {
        let mut profile = self
            .repo
            .find_by_user(owner)
            .await?
            .ok_or(RemoveExperienceError::ProfileNotFound)?;

        profile
            .remove_experience(experience_id)
            .ok_or(RemoveExperienceError::ExperienceNotFound)?;

        Ok(self.repo.save_experience(owner, profile.experience).await?)
    }
}
