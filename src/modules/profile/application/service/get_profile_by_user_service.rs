use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileByUserError, GetProfileByUserUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetProfileByUserService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetProfileByUserService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileByUserUseCase for GetProfileByUserService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, GetProfileByUserError> {
        self.query
            .find_view_by_user(user_id)
            .await?
            .ok_or(GetProfileByUserError::ProfileNotFound)
    }
}
