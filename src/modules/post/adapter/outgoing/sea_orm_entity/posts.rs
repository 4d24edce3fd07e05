use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub avatar: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub likes: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: Json,
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Restrict"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
