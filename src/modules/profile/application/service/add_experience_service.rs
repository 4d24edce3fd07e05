use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{Experience, NewExperience, Profile};
use crate::modules::profile::application::ports::incoming::use_cases::{
    AddExperienceError, AddExperienceUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct AddExperienceService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> AddExperienceService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AddExperienceUseCase for AddExperienceService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        entry: NewExperience,
    ) -> Result<Profile, AddExperienceError> {
        let mut profile = self
            .repo
            .find_by_user(owner)
            .await?
            .ok_or(AddExperienceError::ProfileNotFound)?;

        profile.add_experience(Experience::new(entry));

        Ok(self.repo.save_experience(owner, profile.experience).await?)
    }
}
