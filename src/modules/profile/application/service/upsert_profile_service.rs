use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    parse_skills, Profile, ProfileFields, SocialLinks,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertProfileCommand, UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct UpsertProfileService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> UpsertProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<UpsertProfileCommand> for ProfileFields {
    fn from(command: UpsertProfileCommand) -> Self {
        ProfileFields {
            company: supplied(command.company),
            website: supplied(command.website),
            location: supplied(command.location),
            bio: supplied(command.bio),
            githubusername: supplied(command.githubusername),
            status: command.status.trim().to_string(),
            skills: parse_skills(&command.skills),
            social: SocialLinks {
                youtube: supplied(command.youtube),
                twitter: supplied(command.twitter),
                facebook: supplied(command.facebook),
                linkedin: supplied(command.linkedin),
                instagram: supplied(command.instagram),
            },
        }
    }
}

#[async_trait]
impl<R> UpsertProfileUseCase for UpsertProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, UpsertProfileError> {
        let mut fields = ProfileFields::from(command);

        match self.repo.find_by_user(owner).await? {
            Some(existing) => {
                fields.social = existing.social.merged_with(&fields.social);
                let profile = self.repo.update_profile(owner, fields).await?;
                info!(user_id = %owner, profile_id = %profile.id, "Profile updated");
                Ok(profile)
            }
            None => {
                let profile = self.repo.create_profile(owner, fields).await?;
                info!(user_id = %owner, profile_id = %profile.id, "Profile created");
                Ok(profile)
            }
        }
    }
}
