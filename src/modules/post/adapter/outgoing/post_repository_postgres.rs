use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::entities::{Comment, Like, Post};
use crate::modules::post::application::ports::outgoing::{
    CreatePostData, PostRepository, PostRepositoryError,
};

use super::sea_orm_entity::posts::{
    ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity,
    Model as PostModel,
};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_post(model: PostModel) -> Result<Post, PostRepositoryError> {
        Ok(Post {
            id: model.id,
            user: model.user_id,
            text: model.text,
            name: model.name,
            avatar: model.avatar,
            likes: from_json(model.likes)?,
            comments: from_json(model.comments)?,
            date: model.date.with_timezone(&Utc),
        })
    }

    async fn patch(
        &self,
        post_id: Uuid,
        patch: PostActiveModel,
    ) -> Result<Post, PostRepositoryError> {
        let updated = PostEntity::update_many()
            .set(patch)
            .filter(PostColumn::Id.eq(post_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(db_error)?;

        let model = updated
            .into_iter()
            .next()
            .ok_or(PostRepositoryError::NotFound)?;
        Self::map_to_post(model)
    }
}

fn db_error(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, PostRepositoryError> {
    serde_json::to_value(value).map_err(|e| PostRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(value: JsonValue) -> Result<T, PostRepositoryError> {
    serde_json::from_value(value).map_err(|e| PostRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: CreatePostData) -> Result<Post, PostRepositoryError> {
        let active = PostActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.value()),
            text: Set(data.text),
            name: Set(data.name),
            avatar: Set(data.avatar),
            likes: Set(to_json(&Vec::<Like>::new())?),
            comments: Set(to_json(&Vec::<Comment>::new())?),
            date: Set(Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(db_error)?;
        Self::map_to_post(inserted)
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError> {
        let model = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::map_to_post).transpose()
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, PostRepositoryError> {
        let models = PostEntity::find()
            .order_by_desc(PostColumn::Date)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::map_to_post).collect()
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let result = PostEntity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn save_likes(
        &self,
        post_id: Uuid,
        likes: Vec<Like>,
    ) -> Result<Post, PostRepositoryError> {
        let patch = PostActiveModel {
            likes: Set(to_json(&likes)?),
            ..Default::default()
        };
        self.patch(post_id, patch).await
    }

    async fn save_comments(
        &self,
        post_id: Uuid,
        comments: Vec<Comment>,
    ) -> Result<Post, PostRepositoryError> {
        let patch = PostActiveModel {
            comments: Set(to_json(&comments)?),
            ..Default::default()
        };
        self.patch(post_id, patch).await
    }

    async fn delete_by_owner(&self, owner: UserId) -> Result<u64, PostRepositoryError> {
        let result = PostEntity::delete_many()
            .filter(PostColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }
}
