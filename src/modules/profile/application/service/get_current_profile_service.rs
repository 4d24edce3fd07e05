use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetCurrentProfileError, GetCurrentProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetCurrentProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetCurrentProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCurrentProfileUseCase for GetCurrentProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<ProfileView, GetCurrentProfileError> {
        self.query
            .find_view_by_user(owner)
            .await?
            .ok_or(GetCurrentProfileError::ProfileNotFound)
    }
}
