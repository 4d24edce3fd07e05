use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    Education, Experience, Profile, ProfileFields,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

use super::sea_orm_entity::profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
    Model as ProfileModel,
};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Applies `patch` to the owner's row and returns the stored profile.
    async fn patch(
        &self,
        owner: UserId,
        patch: ProfileActiveModel,
    ) -> Result<Profile, ProfileRepositoryError> {
        let updated = ProfileEntity::update_many()
            .set(patch)
            .filter(ProfileColumn::UserId.eq(owner.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_error)?;

        let model = updated
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)?;
        map_to_profile(model)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, ProfileRepositoryError> {
    serde_json::to_value(value).map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(value: JsonValue) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

/// Decodes the JSON columns of a row into a domain profile.
pub(super) fn map_to_profile(model: ProfileModel) -> Result<Profile, ProfileRepositoryError> {
    let decode = |e: serde_json::Error| ProfileRepositoryError::SerializationError(e.to_string());

    Ok(Profile {
        id: model.id,
        user: model.user_id,
        company: model.company,
        website: model.website,
        location: model.location,
        status: model.status,
        skills: from_json(model.skills).map_err(decode)?,
        bio: model.bio,
        githubusername: model.githubusername,
        social: from_json(model.social).map_err(decode)?,
        experience: from_json(model.experience).map_err(decode)?,
        education: from_json(model.education).map_err(decode)?,
        date: model.date.with_timezone(&Utc),
    })
}

fn map_db_error(e: DbErr) -> ProfileRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return ProfileRepositoryError::AlreadyExists;
    }
    ProfileRepositoryError::DatabaseError(e.to_string())
}

fn set_if_some(value: Option<String>) -> sea_orm::ActiveValue<Option<String>> {
    match value {
        Some(v) => Set(Some(v)),
        None => NotSet,
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user(&self, owner: UserId) -> Result<Option<Profile>, ProfileRepositoryError> {
        let model = ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_error)?;

        model.map(map_to_profile).transpose()
    }

    async fn create_profile(
        &self,
        owner: UserId,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError> {
        let active = ProfileActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.value()),
            company: Set(fields.company),
            website: Set(fields.website),
            location: Set(fields.location),
            status: Set(fields.status),
            skills: Set(to_json(&fields.skills)?),
            bio: Set(fields.bio),
            githubusername: Set(fields.githubusername),
            social: Set(to_json(&fields.social)?),
            experience: Set(to_json(&Vec::<Experience>::new())?),
            education: Set(to_json(&Vec::<Education>::new())?),
            date: Set(Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_error)?;
        map_to_profile(inserted)
    }

    async fn update_profile(
        &self,
        owner: UserId,
        fields: ProfileFields,
    ) -> Result<Profile, ProfileRepositoryError> {
        let patch = ProfileActiveModel {
            company: set_if_some(fields.company),
            website: set_if_some(fields.website),
            location: set_if_some(fields.location),
            bio: set_if_some(fields.bio),
            githubusername: set_if_some(fields.githubusername),
            status: Set(fields.status),
            skills: Set(to_json(&fields.skills)?),
            social: Set(to_json(&fields.social)?),
            ..Default::default()
        };

        self.patch(owner, patch).await
    }

    async fn save_experience(
        &self,
        owner: UserId,
        experience: Vec<Experience>,
    ) -> Result<Profile, ProfileRepositoryError> {
        let patch = ProfileActiveModel {
            experience: Set(to_json(&experience)?),
            ..Default::default()
        };

        self.patch(owner, patch).await
    }

    async fn save_education(
        &self,
        owner: UserId,
        education: Vec<Education>,
    ) -> Result<Profile, ProfileRepositoryError> {
        let patch = ProfileActiveModel {
            education: Set(to_json(&education)?),
            ..Default::default()
        };

        self.patch(owner, patch).await
    }

    async fn delete_by_user(&self, owner: UserId) -> Result<(), ProfileRepositoryError> {
        let result = ProfileEntity::delete_many()
            .filter(ProfileColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_error)?;

        tracing::debug!(user_id = %owner, rows = result.rows_affected, "Deleted profile row");
        Ok(())
    }
}
