use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    CurrentUser, GetCurrentUserError, GetCurrentUserUseCase,
};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct GetCurrentUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetCurrentUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCurrentUserUseCase for GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<CurrentUser, GetCurrentUserError> {
        self.query
            .find_by_id(user_id)
            .await?
            .map(CurrentUser::from)
            .ok_or(GetCurrentUserError::UserNotFound)
    }
}
