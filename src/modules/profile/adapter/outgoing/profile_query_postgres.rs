use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{ProfileView, UserSummary};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepositoryError,
};

use super::profile_repository_postgres::map_to_profile;
use super::sea_orm_entity::profiles::{
    Column as ProfileColumn, Entity as ProfileEntity, Model as ProfileModel,
};

#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn owners(&self, ids: Vec<Uuid>) -> Result<HashMap<Uuid, UserSummary>, ProfileQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        Ok(users
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    UserSummary {
                        id: u.id,
                        name: u.name,
                        avatar: u.avatar,
                    },
                )
            })
            .collect())
    }

    async fn to_views(&self, models: Vec<ProfileModel>) -> Result<Vec<ProfileView>, ProfileQueryError> {
        let mut owners = self.owners(models.iter().map(|m| m.user_id).collect()).await?;

        models
            .into_iter()
            .map(|model| {
                let user = owners.remove(&model.user_id);
                let profile = map_to_profile(model).map_err(ProfileQueryError::from)?;
                Ok(ProfileView::new(profile, user))
            })
            .collect()
    }
}

impl From<ProfileRepositoryError> for ProfileQueryError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::SerializationError(msg) => {
                ProfileQueryError::SerializationError(msg)
            }
            other => ProfileQueryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_view_by_user(
        &self,
        owner: UserId,
    ) -> Result<Option<ProfileView>, ProfileQueryError> {
        let model = ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        match model {
            Some(model) => Ok(self.to_views(vec![model]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    async fn list_views(&self) -> Result<Vec<ProfileView>, ProfileQueryError> {
        let models = ProfileEntity::find()
            .order_by_asc(ProfileColumn::Date)
            .all(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        self.to_views(models).await
    }
}
