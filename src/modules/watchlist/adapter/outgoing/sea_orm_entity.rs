use sea_orm::entity::prelude::*;

use crate::watchlist::domain::entities::WatchlistEntry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "watchlist_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> WatchlistEntry {
        WatchlistEntry {
            id: self.id,
            user_id: self.user_id,
            movie_id: self.movie_id,
            created_at: self.created_at.into(),
        }
    }
}
