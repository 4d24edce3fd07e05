use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfilesError, GetProfilesUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetProfilesService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetProfilesService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfilesUseCase for GetProfilesService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileView>, GetProfilesError> {
        Ok(self.query.list_views().await?)
    }
}
