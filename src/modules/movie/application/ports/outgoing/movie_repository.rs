use async_trait::async_trait;
use uuid::Uuid;

use crate::movie::domain::entities::Movie;

#[derive(Debug, Clone)]
pub struct MovieData {
    pub title: String,
    pub description: String,
    pub release_year: i32,
}

/// Partial patch: `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<i32>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.release_year.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("movie not found")]
    MovieNotFound,
}

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn insert_movie(&self, data: MovieData) -> Result<Movie, MovieRepositoryError>;

    async fn find_by_id(&self, movie_id: Uuid) -> Result<Option<Movie>, MovieRepositoryError>;

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Movie>, MovieRepositoryError>;

    async fn update_movie(
        &self,
        movie_id: Uuid,
        patch: MoviePatch,
    ) -> Result<Movie, MovieRepositoryError>;

    /// Hard delete; returns the removed record.
    async fn delete_movie(&self, movie_id: Uuid) -> Result<Movie, MovieRepositoryError>;
}
