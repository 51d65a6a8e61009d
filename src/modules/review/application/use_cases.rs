use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::Actor;
use crate::review::application::ports::outgoing::{
    ReviewData, ReviewPatch, ReviewRepository, ReviewRepositoryError,
};
use crate::review::domain::entities::Review;
use crate::shared::api::PageParams;

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;
const MAX_COMMENT_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewFieldError {
    #[error("rating must be between {MIN_RATING} and {MAX_RATING}")]
    InvalidRating,

    #[error("comment must be 1-{MAX_COMMENT_LEN} characters")]
    InvalidComment,
}

/// Validated review payload. The declared `user_id` is checked against the
/// actor at execution time, not here.
#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    movie_id: Uuid,
    user_id: Uuid,
    rating: i32,
    comment: String,
}

impl CreateReviewCommand {
    pub fn new(
        movie_id: Uuid,
        user_id: Uuid,
        rating: i32,
        comment: String,
    ) -> Result<Self, ReviewFieldError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewFieldError::InvalidRating);
        }

        let comment = comment.trim().to_string();
        if comment.is_empty() || comment.chars().count() > MAX_COMMENT_LEN {
            return Err(ReviewFieldError::InvalidComment);
        }

        Ok(Self {
            movie_id,
            user_id,
            rating,
            comment,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn movie_id(&self) -> Uuid {
        self.movie_id
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

fn validate_patch(patch: &ReviewPatch) -> Result<(), ReviewFieldError> {
    if let Some(rating) = patch.rating {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewFieldError::InvalidRating);
        }
    }
    if let Some(comment) = &patch.comment {
        if comment.trim().is_empty() || comment.chars().count() > MAX_COMMENT_LEN {
            return Err(ReviewFieldError::InvalidComment);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewError {
    #[error("not allowed to act on this review")]
    Forbidden,

    #[error("review not found")]
    NotFound,

    #[error("{0}")]
    InvalidField(#[from] ReviewFieldError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Review operations. Reads are public. Creation is bound to the actor's
/// own identity; edits and deletes check existence first (a missing id is
/// 404 to everyone), then owner-or-admin.
#[async_trait]
pub trait IReviewUseCases: Send + Sync {
    async fn create(
        &self,
        actor: &Actor,
        command: CreateReviewCommand,
    ) -> Result<Review, ReviewError>;

    async fn list(&self, page: PageParams) -> Result<Vec<Review>, ReviewError>;

    async fn get(&self, review_id: Uuid) -> Result<Review, ReviewError>;

    async fn list_by_movie(
        &self,
        movie_id: Uuid,
        page: PageParams,
    ) -> Result<Vec<Review>, ReviewError>;

    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageParams,
    ) -> Result<Vec<Review>, ReviewError>;

    async fn update(
        &self,
        actor: &Actor,
        review_id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, ReviewError>;

    async fn delete(&self, actor: &Actor, review_id: Uuid) -> Result<Review, ReviewError>;
}

pub struct ReviewService<R>
where
    R: ReviewRepository,
{
    repository: R,
}

impl<R> ReviewService<R>
where
    R: ReviewRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IReviewUseCases for ReviewService<R>
where
    R: ReviewRepository,
{
    async fn create(
        &self,
        actor: &Actor,
        command: CreateReviewCommand,
    ) -> Result<Review, ReviewError> {
        // Impersonation guard: even admins may only review as themselves.
        actor
            .require_self(command.user_id)
            .map_err(|_| ReviewError::Forbidden)?;

        self.repository
            .insert_review(ReviewData {
                movie_id: command.movie_id,
                user_id: command.user_id,
                rating: command.rating,
                comment: command.comment,
            })
            .await
            .map_err(|e| ReviewError::RepositoryError(e.to_string()))
    }

    async fn list(&self, page: PageParams) -> Result<Vec<Review>, ReviewError> {
        self.repository
            .list(page.skip(), page.limit())
            .await
            .map_err(|e| ReviewError::RepositoryError(e.to_string()))
    }

    async fn get(&self, review_id: Uuid) -> Result<Review, ReviewError> {
        self.repository
            .find_by_id(review_id)
            .await
            .map_err(|e| ReviewError::RepositoryError(e.to_string()))?
            .ok_or(ReviewError::NotFound)
    }

    async fn list_by_movie(
        &self,
        movie_id: Uuid,
        page: PageParams,
    ) -> Result<Vec<Review>, ReviewError> {
        self.repository
            .list_by_movie(movie_id, page.skip(), page.limit())
            .await
            .map_err(|e| ReviewError::RepositoryError(e.to_string()))
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageParams,
    ) -> Result<Vec<Review>, ReviewError> {
        self.repository
            .list_by_user(user_id, page.skip(), page.limit())
            .await
            .map_err(|e| ReviewError::RepositoryError(e.to_string()))
    }

    async fn update(
        &self,
        actor: &Actor,
        review_id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, ReviewError> {
        validate_patch(&patch)?;

        let existing = self
            .repository
            .find_by_id(review_id)
            .await
            .map_err(|e| ReviewError::RepositoryError(e.to_string()))?
            .ok_or(ReviewError::NotFound)?;

        actor
            .require_self_or_admin(existing.user_id)
            .map_err(|_| ReviewError::Forbidden)?;

        if patch.is_empty() {
            return Ok(existing);
        }

        self.repository
            .update_review(review_id, patch)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::ReviewNotFound => ReviewError::NotFound,
                other => ReviewError::RepositoryError(other.to_string()),
            })
    }

    async fn delete(&self, actor: &Actor, review_id: Uuid) -> Result<Review, ReviewError> {
        let existing = self
            .repository
            .find_by_id(review_id)
            .await
            .map_err(|e| ReviewError::RepositoryError(e.to_string()))?
            .ok_or(ReviewError::NotFound)?;

        actor
            .require_self_or_admin(existing.user_id)
            .map_err(|_| ReviewError::Forbidden)?;

        self.repository
            .delete_review(review_id)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::ReviewNotFound => ReviewError::NotFound,
                other => ReviewError::RepositoryError(other.to_string()),
            })
    }
}
