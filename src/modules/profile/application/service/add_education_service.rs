use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{Education, NewEducation, Profile};
use crate::modules::profile::application::ports::incoming::use_cases::{
    AddEducationError, AddEducationUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct AddEducationService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> AddEducationService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AddEducationUseCase for AddEducationService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        entry: NewEducation,
    ) -> Result<Profile, AddEducationError> {
        let mut profile = self
            .repo
            .find_by_user(owner)
            .await?
            .ok_or(AddEducationError::ProfileNotFound)?;

        profile.add_education(Education::new(entry));

        Ok(self.repo.save_education(owner, profile.education).await?)
    }
}
