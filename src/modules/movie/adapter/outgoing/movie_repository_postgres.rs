use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as MovieActiveModel, Column as MovieColumn, Entity as MovieEntity,
};
use crate::movie::application::ports::outgoing::{
    MovieData, MoviePatch, MovieRepository, MovieRepositoryError,
};
use crate::movie::domain::entities::Movie;

#[derive(Clone, Debug)]
pub struct MovieRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryPostgres {
    async fn insert_movie(&self, data: MovieData) -> Result<Movie, MovieRepositoryError> {
        let active_movie = MovieActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            release_year: Set(data.release_year),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_movie
            .insert(&*self.db)
            .await
            .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_domain())
    }

    async fn find_by_id(&self, movie_id: Uuid) -> Result<Option<Movie>, MovieRepositoryError> {
        let movie = MovieEntity::find_by_id(movie_id)
            .one(&*self.db)
            .await
            .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))?;

        Ok(movie.map(|m| m.into_domain()))
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Movie>, MovieRepositoryError> {
        let movies = MovieEntity::find()
            .order_by_asc(MovieColumn::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))?;

        Ok(movies.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn update_movie(
        &self,
        movie_id: Uuid,
        patch: MoviePatch,
    ) -> Result<Movie, MovieRepositoryError> {
        let movie = MovieEntity::find_by_id(movie_id)
            .one(&*self.db)
            .await
            .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(MovieRepositoryError::MovieNotFound)?;

        let mut active_movie: MovieActiveModel = movie.into();
        if let Some(title) = patch.title {
            active_movie.title = Set(title);
        }
        if let Some(description) = patch.description {
            active_movie.description = Set(description);
        }
        if let Some(year) = patch.release_year {
            active_movie.release_year = Set(year);
        }
        active_movie.updated_at = Set(chrono::Utc::now().into());

        let updated = active_movie
            .update(&*self.db)
            .await
            .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.into_domain())
    }

    async fn delete_movie(&self, movie_id: Uuid) -> Result<Movie, MovieRepositoryError> {
        let movie = MovieEntity::find_by_id(movie_id)
            .one(&*self.db)
            .await
            .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(MovieRepositoryError::MovieNotFound)?;

        let removed = movie.clone();
        movie
            .delete(&*self.db)
            .await
            .map_err(|e| MovieRepositoryError::DatabaseError(e.to_string()))?;

        Ok(removed.into_domain())
    }
}
