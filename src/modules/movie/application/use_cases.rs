use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::Actor;
use crate::movie::application::ports::outgoing::{
    MovieData, MoviePatch, MovieRepository, MovieRepositoryError,
};
use crate::movie::domain::entities::Movie;
use crate::shared::api::PageParams;

const MIN_RELEASE_YEAR: i32 = 1888;
const MAX_RELEASE_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MovieFieldError {
    #[error("title must be 1-255 characters")]
    InvalidTitle,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("release year must be between {MIN_RELEASE_YEAR} and {MAX_RELEASE_YEAR}")]
    InvalidReleaseYear,
}

/// Validated movie payload.
#[derive(Debug, Clone)]
pub struct CreateMovieCommand {
    title: String,
    description: String,
    release_year: i32,
}

impl CreateMovieCommand {
    pub fn new(
        title: String,
        description: String,
        release_year: i32,
    ) -> Result<Self, MovieFieldError> {
        let title = title.trim().to_string();
        if title.is_empty() || title.chars().count() > 255 {
            return Err(MovieFieldError::InvalidTitle);
        }

        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(MovieFieldError::EmptyDescription);
        }

        if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&release_year) {
            return Err(MovieFieldError::InvalidReleaseYear);
        }

        Ok(Self {
            title,
            description,
            release_year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }
}

fn validate_patch(patch: &MoviePatch) -> Result<(), MovieFieldError> {
    if let Some(title) = &patch.title {
        if title.trim().is_empty() || title.chars().count() > 255 {
            return Err(MovieFieldError::InvalidTitle);
        }
    }
    if let Some(description) = &patch.description {
        if description.trim().is_empty() {
            return Err(MovieFieldError::EmptyDescription);
        }
    }
    if let Some(year) = patch.release_year {
        if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
            return Err(MovieFieldError::InvalidReleaseYear);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieError {
    #[error("admin privileges required")]
    Forbidden,

    #[error("movie not found")]
    NotFound,

    #[error("{0}")]
    InvalidField(#[from] MovieFieldError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Catalogue operations. Reads are public; every mutation is admin-gated.
/// Update and delete resolve the movie first, so a missing id is 404 to
/// admins and non-admins alike.
#[async_trait]
pub trait IMovieUseCases: Send + Sync {
    async fn create(&self, actor: &Actor, command: CreateMovieCommand)
        -> Result<Movie, MovieError>;

    async fn list(&self, page: PageParams) -> Result<Vec<Movie>, MovieError>;

    async fn get(&self, movie_id: Uuid) -> Result<Movie, MovieError>;

    async fn update(
        &self,
        actor: &Actor,
        movie_id: Uuid,
        patch: MoviePatch,
    ) -> Result<Movie, MovieError>;

    async fn delete(&self, actor: &Actor, movie_id: Uuid) -> Result<Movie, MovieError>;
}

pub struct MovieService<R>
where
    R: MovieRepository,
{
    repository: R,
}

impl<R> MovieService<R>
where
    R: MovieRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IMovieUseCases for MovieService<R>
where
    R: MovieRepository,
{
    async fn create(
        &self,
        actor: &Actor,
        command: CreateMovieCommand,
    ) -> Result<Movie, MovieError> {
        actor.require_admin().map_err(|_| MovieError::Forbidden)?;

        self.repository
            .insert_movie(MovieData {
                title: command.title,
                description: command.description,
                release_year: command.release_year,
            })
            .await
            .map_err(|e| MovieError::RepositoryError(e.to_string()))
    }

    async fn list(&self, page: PageParams) -> Result<Vec<Movie>, MovieError> {
        self.repository
            .list(page.skip(), page.limit())
            .await
            .map_err(|e| MovieError::RepositoryError(e.to_string()))
    }

    async fn get(&self, movie_id: Uuid) -> Result<Movie, MovieError> {
        self.repository
            .find_by_id(movie_id)
            .await
            .map_err(|e| MovieError::RepositoryError(e.to_string()))?
            .ok_or(MovieError::NotFound)
    }

    async fn update(
        &self,
        actor: &Actor,
        movie_id: Uuid,
        patch: MoviePatch,
    ) -> Result<Movie, MovieError> {
        validate_patch(&patch)?;

        let existing = self
            .repository
            .find_by_id(movie_id)
            .await
            .map_err(|e| MovieError::RepositoryError(e.to_string()))?
            .ok_or(MovieError::NotFound)?;

        actor.require_admin().map_err(|_| MovieError::Forbidden)?;

        if patch.is_empty() {
            return Ok(existing);
        }

        self.repository
            .update_movie(movie_id, patch)
            .await
            .map_err(|e| match e {
                MovieRepositoryError::MovieNotFound => MovieError::NotFound,
                other => MovieError::RepositoryError(other.to_string()),
            })
    }

    async fn delete(&self, actor: &Actor, movie_id: Uuid) -> Result<Movie, MovieError> {
        self.repository
            .find_by_id(movie_id)
            .await
            .map_err(|e| MovieError::RepositoryError(e.to_string()))?
            .ok_or(MovieError::NotFound)?;

        actor.require_admin().map_err(|_| MovieError::Forbidden)?;

        self.repository
            .delete_movie(movie_id)
            .await
            .map_err(|e| match e {
                MovieRepositoryError::MovieNotFound => MovieError::NotFound,
                other => MovieError::RepositoryError(other.to_string()),
            })
    }
}
