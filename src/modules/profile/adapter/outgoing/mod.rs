pub mod profile_query_postgres;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;
