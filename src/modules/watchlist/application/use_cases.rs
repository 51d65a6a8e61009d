use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::Actor;
use crate::shared::api::PageParams;
use crate::watchlist::application::ports::outgoing::{
    WatchlistRepository, WatchlistRepositoryError,
};
use crate::watchlist::domain::entities::WatchlistEntry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatchlistError {
    #[error("not allowed to act on this watchlist")]
    Forbidden,

    #[error("watchlist entry not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Watchlist operations. Every operation names a target `user_id`; add,
/// check and remove are bound to the actor's own identity, while reading
/// a full watchlist is open to the owner or an admin.
#[async_trait]
pub trait IWatchlistUseCases: Send + Sync {
    /// Idempotent: re-adding a (user, movie) pair returns the entry
    /// created the first time.
    async fn add(
        &self,
        actor: &Actor,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistError>;

    async fn list_for_user(
        &self,
        actor: &Actor,
        user_id: Uuid,
        page: PageParams,
    ) -> Result<Vec<WatchlistEntry>, WatchlistError>;

    async fn contains(
        &self,
        actor: &Actor,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<bool, WatchlistError>;

    async fn remove(
        &self,
        actor: &Actor,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistError>;
}

pub struct WatchlistService<R>
where
    R: WatchlistRepository,
{
    repository: R,
}

impl<R> WatchlistService<R>
where
    R: WatchlistRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IWatchlistUseCases for WatchlistService<R>
where
    R: WatchlistRepository,
{
    async fn add(
        &self,
        actor: &Actor,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistError> {
        actor
            .require_self(user_id)
            .map_err(|_| WatchlistError::Forbidden)?;

        if let Some(existing) = self
            .repository
            .find_by_pair(user_id, movie_id)
            .await
            .map_err(|e| WatchlistError::RepositoryError(e.to_string()))?
        {
            return Ok(existing);
        }

        self.repository
            .insert_entry(user_id, movie_id)
            .await
            .map_err(|e| WatchlistError::RepositoryError(e.to_string()))
    }

    async fn list_for_user(
        &self,
        actor: &Actor,
        user_id: Uuid,
        page: PageParams,
    ) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        actor
            .require_self_or_admin(user_id)
            .map_err(|_| WatchlistError::Forbidden)?;

        self.repository
            .list_by_user(user_id, page.skip(), page.limit())
            .await
            .map_err(|e| WatchlistError::RepositoryError(e.to_string()))
    }

    async fn contains(
        &self,
        actor: &Actor,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<bool, WatchlistError> {
        actor
            .require_self(user_id)
            .map_err(|_| WatchlistError::Forbidden)?;

        let entry = self
            .repository
            .find_by_pair(user_id, movie_id)
            .await
            .map_err(|e| WatchlistError::RepositoryError(e.to_string()))?;

        Ok(entry.is_some())
    }

    async fn remove(
        &self,
        actor: &Actor,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistError> {
        actor
            .require_self(user_id)
            .map_err(|_| WatchlistError::Forbidden)?;

        self.repository
            .delete_by_pair(user_id, movie_id)
            .await
            .map_err(|e| match e {
                WatchlistRepositoryError::EntryNotFound => WatchlistError::NotFound,
                other => WatchlistError::RepositoryError(other.to_string()),
            })
    }
}
