pub mod sea_orm_entity;
pub mod watchlist_repository_postgres;
