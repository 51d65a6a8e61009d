use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::watchlist::domain::entities::WatchlistEntry;

#[derive(Debug, Clone, Error)]
pub enum WatchlistRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("watchlist entry not found")]
    EntryNotFound,
}

/// Storage port for watchlist bookmarks, keyed by the (user, movie) pair.
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    async fn find_by_pair(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<Option<WatchlistEntry>, WatchlistRepositoryError>;

    async fn insert_entry(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistRepositoryError>;

    async fn list_by_user(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<WatchlistEntry>, WatchlistRepositoryError>;

    async fn delete_by_pair(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistRepositoryError>;
}
