use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ReviewEntity,
};
use crate::review::application::ports::outgoing::{
    ReviewData, ReviewPatch, ReviewRepository, ReviewRepositoryError,
};
use crate::review::domain::entities::Review;

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn insert_review(&self, data: ReviewData) -> Result<Review, ReviewRepositoryError> {
        let active_review = ReviewActiveModel {
            id: Set(Uuid::new_v4()),
            movie_id: Set(data.movie_id),
            user_id: Set(data.user_id),
            rating: Set(data.rating),
            comment: Set(data.comment),
            created_at: NotSet,
        };

        let inserted = active_review
            .insert(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_domain())
    }

    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, ReviewRepositoryError> {
        let review = ReviewEntity::find_by_id(review_id)
            .one(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(review.map(|m| m.into_domain()))
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Review>, ReviewRepositoryError> {
        let reviews = ReviewEntity::find()
            .order_by_asc(ReviewColumn::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(reviews.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn list_by_movie(
        &self,
        movie_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        let reviews = ReviewEntity::find()
            .filter(ReviewColumn::MovieId.eq(movie_id))
            .order_by_asc(ReviewColumn::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(reviews.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        let reviews = ReviewEntity::find()
            .filter(ReviewColumn::UserId.eq(user_id))
            .order_by_asc(ReviewColumn::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(reviews.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn update_review(
        &self,
        review_id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, ReviewRepositoryError> {
        let review = ReviewEntity::find_by_id(review_id)
            .one(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ReviewRepositoryError::ReviewNotFound)?;

        let mut active_review: ReviewActiveModel = review.into();
        if let Some(rating) = patch.rating {
            active_review.rating = Set(rating);
        }
        if let Some(comment) = patch.comment {
            active_review.comment = Set(comment);
        }

        let updated = active_review
            .update(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.into_domain())
    }

    async fn delete_review(&self, review_id: Uuid) -> Result<Review, ReviewRepositoryError> {
        let review = ReviewEntity::find_by_id(review_id)
            .one(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ReviewRepositoryError::ReviewNotFound)?;

        let removed = review.clone();
        review
            .delete(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(removed.into_domain())
    }
}
