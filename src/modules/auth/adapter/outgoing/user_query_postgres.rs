use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl UserQueryPostgres {
    fn map_to_query_result(model: UserModel) -> UserQueryResult {
        UserQueryResult {
            id: UserId::from(model.id),
            name: model.name,
            email: model.email,
            avatar: model.avatar,
            password_hash: model.password_hash,
            date: model.date.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_query_result))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_query_result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn create_mock_user_model(id: Uuid) -> UserModel {
        UserModel {
            id,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            avatar: "https://www.gravatar.com/avatar/abc?s=200&r=pg&d=mm".to_string(),
            password_hash: "hashed_password".to_string(),
            date: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(user_id)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query
            .find_by_id(UserId::from(user_id))
            .await
            .unwrap()
            .expect("user should be found");

        assert_eq!(user.id.value(), user_id);
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name, "Test User");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(UserId::from(Uuid::new_v4())).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(UserId::from(Uuid::new_v4())).await;

        match result {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(Uuid::new_v4())]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_email("test@example.com").await.unwrap();

        assert_eq!(user.unwrap().email, "test@example.com");
    }

    #[tokio::test]
    async fn test_find_by_email_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("nonexistent@example.com").await;

        assert!(result.unwrap().is_none());
    }
}
