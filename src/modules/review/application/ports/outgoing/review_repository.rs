use async_trait::async_trait;
use uuid::Uuid;

use crate::review::domain::entities::Review;

#[derive(Debug, Clone)]
pub struct ReviewData {
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

/// Partial patch: `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl ReviewPatch {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.comment.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("review not found")]
    ReviewNotFound,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert_review(&self, data: ReviewData) -> Result<Review, ReviewRepositoryError>;

    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, ReviewRepositoryError>;

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Review>, ReviewRepositoryError>;

    async fn list_by_movie(
        &self,
        movie_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Review>, ReviewRepositoryError>;

    async fn list_by_user(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Review>, ReviewRepositoryError>;

    async fn update_review(
        &self,
        review_id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, ReviewRepositoryError>;

    /// Hard delete; returns the removed record.
    async fn delete_review(&self, review_id: Uuid) -> Result<Review, ReviewRepositoryError>;
}
