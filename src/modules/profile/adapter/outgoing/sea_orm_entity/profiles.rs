use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub company: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub githubusername: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub social: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub education: Json,
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
