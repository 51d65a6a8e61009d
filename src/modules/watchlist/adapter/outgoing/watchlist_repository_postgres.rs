use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as EntryEntity,
};
use crate::watchlist::application::ports::outgoing::{
    WatchlistRepository, WatchlistRepositoryError,
};
use crate::watchlist::domain::entities::WatchlistEntry;

#[derive(Clone, Debug)]
pub struct WatchlistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WatchlistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WatchlistRepository for WatchlistRepositoryPostgres {
    async fn find_by_pair(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<Option<WatchlistEntry>, WatchlistRepositoryError> {
        let entry = EntryEntity::find()
            .filter(EntryColumn::UserId.eq(user_id))
            .filter(EntryColumn::MovieId.eq(movie_id))
            .one(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        Ok(entry.map(|m| m.into_domain()))
    }

    async fn insert_entry(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistRepositoryError> {
        let active_entry = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            movie_id: Set(movie_id),
            created_at: NotSet,
        };

        let inserted = active_entry
            .insert(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_domain())
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<WatchlistEntry>, WatchlistRepositoryError> {
        let entries = EntryEntity::find()
            .filter(EntryColumn::UserId.eq(user_id))
            .order_by_asc(EntryColumn::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        Ok(entries.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn delete_by_pair(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistRepositoryError> {
        let entry = EntryEntity::find()
            .filter(EntryColumn::UserId.eq(user_id))
            .filter(EntryColumn::MovieId.eq(movie_id))
            .one(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(WatchlistRepositoryError::EntryNotFound)?;

        let removed = entry.clone();
        entry
            .delete(&*self.db)
            .await
            .map_err(|e| WatchlistRepositoryError::DatabaseError(e.to_string()))?;

        Ok(removed.into_domain())
    }
}
