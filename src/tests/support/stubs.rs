//! Hand-rolled stubs shared by the handler tests. The policy-aware mocks
//! enforce the same authorization rules as the real services, so route
//! tests exercise the full request-to-policy path without a database.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policy::Actor;
use crate::auth::application::helpers::{CurrentUserResolver, ResolveUserError};
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::movie::application::ports::outgoing::MoviePatch;
use crate::movie::application::use_cases::{CreateMovieCommand, IMovieUseCases, MovieError};
use crate::movie::domain::entities::Movie;
use crate::review::application::ports::outgoing::ReviewPatch;
use crate::review::application::use_cases::{
    CreateReviewCommand, IReviewUseCases, ReviewError, ReviewFieldError,
};
use crate::review::domain::entities::Review;
use crate::shared::api::PageParams;
use crate::watchlist::application::use_cases::{IWatchlistUseCases, WatchlistError};
use crate::watchlist::domain::entities::WatchlistEntry;

/// The id every [`StubResolver`] user carries, so a test can declare a
/// payload `user_id` that matches (or deliberately does not match) the
/// authenticated caller.
pub fn fixed_user_id() -> Uuid {
    Uuid::from_u128(0x00000000_0000_0000_0000_0000c1ef00d1)
}

/// Token provider that accepts any bearer token and maps it to the given
/// subject. Lets handler tests send `Bearer any-token`.
struct StubTokenProvider {
    subject: String,
}

impl TokenProvider for StubTokenProvider {
    fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        Ok(format!("stub-token-for-{subject}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.subject.clone(),
            exp: Utc::now().timestamp() + 3600,
        })
    }
}

pub fn token_provider_data(subject: &str) -> web::Data<Arc<dyn TokenProvider>> {
    let provider: Arc<dyn TokenProvider> = Arc::new(StubTokenProvider {
        subject: subject.to_string(),
    });
    web::Data::new(provider)
}

/// Current-user resolver with a canned outcome.
pub struct StubResolver {
    outcome: Result<User, ResolveUserError>,
}

impl StubResolver {
    fn user(username: &str, is_admin: bool) -> User {
        let now = Utc::now();
        User {
            id: fixed_user_id(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$stub".to_string(),
            full_name: None,
            is_active: true,
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn active_user(username: &str) -> Self {
        Self {
            outcome: Ok(Self::user(username, false)),
        }
    }

    pub fn admin(username: &str) -> Self {
        Self {
            outcome: Ok(Self::user(username, true)),
        }
    }

    pub fn inactive() -> Self {
        Self {
            outcome: Err(ResolveUserError::InactiveUser),
        }
    }
}

#[async_trait]
impl CurrentUserResolver for StubResolver {
    async fn resolve(&self, _username: &str) -> Result<User, ResolveUserError> {
        self.outcome.clone()
    }
}

/// Movie use cases over a single optional stored movie, applying the same
/// admin gate as the real service.
pub struct MockMovieUseCases {
    movie: Option<Movie>,
}

impl MockMovieUseCases {
    pub fn empty() -> Self {
        Self { movie: None }
    }

    pub fn movie_id(&self) -> Uuid {
        self.movie.as_ref().expect("no stored movie").id
    }
}

impl Default for MockMovieUseCases {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            movie: Some(Movie {
                id: Uuid::new_v4(),
                title: "Arrival".to_string(),
                description: "A linguist decodes an alien language.".to_string(),
                release_year: 2016,
                created_at: now,
                updated_at: now,
            }),
        }
    }
}

#[async_trait]
impl IMovieUseCases for MockMovieUseCases {
    async fn create(
        &self,
        actor: &Actor,
        command: CreateMovieCommand,
    ) -> Result<Movie, MovieError> {
        actor.require_admin().map_err(|_| MovieError::Forbidden)?;
        let now = Utc::now();
        Ok(Movie {
            id: Uuid::new_v4(),
            title: command.title().to_string(),
            description: command.description().to_string(),
            release_year: command.release_year(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn list(&self, _page: PageParams) -> Result<Vec<Movie>, MovieError> {
        Ok(self.movie.clone().into_iter().collect())
    }

    async fn get(&self, movie_id: Uuid) -> Result<Movie, MovieError> {
        self.movie
            .clone()
            .filter(|m| m.id == movie_id)
            .ok_or(MovieError::NotFound)
    }

    async fn update(
        &self,
        actor: &Actor,
        _movie_id: Uuid,
        patch: MoviePatch,
    ) -> Result<Movie, MovieError> {
        let mut movie = self.movie.clone().ok_or(MovieError::NotFound)?;
        actor.require_admin().map_err(|_| MovieError::Forbidden)?;
        if let Some(title) = patch.title {
            movie.title = title;
        }
        if let Some(description) = patch.description {
            movie.description = description;
        }
        if let Some(release_year) = patch.release_year {
            movie.release_year = release_year;
        }
        Ok(movie)
    }

    async fn delete(&self, actor: &Actor, _movie_id: Uuid) -> Result<Movie, MovieError> {
        let movie = self.movie.clone().ok_or(MovieError::NotFound)?;
        actor.require_admin().map_err(|_| MovieError::Forbidden)?;
        Ok(movie)
    }
}

/// Review use cases over a single optional stored review, mirroring the
/// real service's policy order: creation is self-only, edits check
/// existence first, then owner-or-admin.
pub struct MockReviewUseCases {
    review: Option<Review>,
}

impl MockReviewUseCases {
    pub fn empty() -> Self {
        Self { review: None }
    }

    /// Stored review authored by a user other than the stub caller.
    pub fn default_with_foreign_author() -> Self {
        Self {
            review: Some(Self::sample_review(Uuid::new_v4())),
        }
    }

    fn sample_review(author: Uuid) -> Review {
        Review {
            id: Uuid::new_v4(),
            movie_id: Uuid::new_v4(),
            user_id: author,
            rating: 4,
            comment: "Tense and quiet at once.".to_string(),
            created_at: Utc::now(),
        }
    }

    fn stored(&self) -> &Review {
        self.review.as_ref().expect("no stored review")
    }

    pub fn review_id(&self) -> Uuid {
        self.stored().id
    }

    pub fn movie_id(&self) -> Uuid {
        self.stored().movie_id
    }

    pub fn author_id(&self) -> Uuid {
        self.stored().user_id
    }

    fn validate_patch(patch: &ReviewPatch) -> Result<(), ReviewError> {
        if let Some(rating) = patch.rating {
            if !(1..=5).contains(&rating) {
                return Err(ReviewError::InvalidField(ReviewFieldError::InvalidRating));
            }
        }
        if let Some(comment) = &patch.comment {
            if comment.trim().is_empty() || comment.chars().count() > 500 {
                return Err(ReviewError::InvalidField(ReviewFieldError::InvalidComment));
            }
        }
        Ok(())
    }
}

impl Default for MockReviewUseCases {
    fn default() -> Self {
        Self {
            review: Some(Self::sample_review(fixed_user_id())),
        }
    }
}

#[async_trait]
impl IReviewUseCases for MockReviewUseCases {
    async fn create(
        &self,
        actor: &Actor,
        command: CreateReviewCommand,
    ) -> Result<Review, ReviewError> {
        actor
            .require_self(command.user_id())
            .map_err(|_| ReviewError::Forbidden)?;
        Ok(Review {
            id: Uuid::new_v4(),
            movie_id: command.movie_id(),
            user_id: command.user_id(),
            rating: command.rating(),
            comment: command.comment().to_string(),
            created_at: Utc::now(),
        })
    }

    async fn list(&self, _page: PageParams) -> Result<Vec<Review>, ReviewError> {
        Ok(self.review.clone().into_iter().collect())
    }

    async fn get(&self, review_id: Uuid) -> Result<Review, ReviewError> {
        self.review
            .clone()
            .filter(|r| r.id == review_id)
            .ok_or(ReviewError::NotFound)
    }

    async fn list_by_movie(
        &self,
        movie_id: Uuid,
        _page: PageParams,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(self
            .review
            .clone()
            .into_iter()
            .filter(|r| r.movie_id == movie_id)
            .collect())
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        _page: PageParams,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(self
            .review
            .clone()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    async fn update(
        &self,
        actor: &Actor,
        _review_id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, ReviewError> {
        Self::validate_patch(&patch)?;
        let mut review = self.review.clone().ok_or(ReviewError::NotFound)?;
        actor
            .require_self_or_admin(review.user_id)
            .map_err(|_| ReviewError::Forbidden)?;
        if let Some(rating) = patch.rating {
            review.rating = rating;
        }
        if let Some(comment) = patch.comment {
            review.comment = comment;
        }
        Ok(review)
    }

    async fn delete(&self, actor: &Actor, _review_id: Uuid) -> Result<Review, ReviewError> {
        let review = self.review.clone().ok_or(ReviewError::NotFound)?;
        actor
            .require_self_or_admin(review.user_id)
            .map_err(|_| ReviewError::Forbidden)?;
        Ok(review)
    }
}

/// Watchlist use cases over a single optional stored entry, owned by the
/// stub caller.
pub struct MockWatchlistUseCases {
    entry: Option<WatchlistEntry>,
}

impl MockWatchlistUseCases {
    pub fn empty() -> Self {
        Self { entry: None }
    }

    fn stored(&self) -> &WatchlistEntry {
        self.entry.as_ref().expect("no stored watchlist entry")
    }

    pub fn entry_id(&self) -> Uuid {
        self.stored().id
    }

    pub fn movie_id(&self) -> Uuid {
        self.stored().movie_id
    }
}

impl Default for MockWatchlistUseCases {
    fn default() -> Self {
        Self {
            entry: Some(WatchlistEntry {
                id: Uuid::new_v4(),
                user_id: fixed_user_id(),
                movie_id: Uuid::new_v4(),
                created_at: Utc::now(),
            }),
        }
    }
}

#[async_trait]
impl IWatchlistUseCases for MockWatchlistUseCases {
    async fn add(
        &self,
        actor: &Actor,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistError> {
        actor
            .require_self(user_id)
            .map_err(|_| WatchlistError::Forbidden)?;
        if let Some(entry) = &self.entry {
            if entry.user_id == user_id && entry.movie_id == movie_id {
                return Ok(entry.clone());
            }
        }
        Ok(WatchlistEntry {
            id: Uuid::new_v4(),
            user_id,
            movie_id,
            created_at: Utc::now(),
        })
    }

    async fn list_for_user(
        &self,
        actor: &Actor,
        user_id: Uuid,
        _page: PageParams,
    ) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        actor
            .require_self_or_admin(user_id)
            .map_err(|_| WatchlistError::Forbidden)?;
        Ok(self
            .entry
            .clone()
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect())
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
        Ok(self
            .entry
            .as_ref()
            .is_some_and(|e| e.user_id == user_id && e.movie_id == movie_id))
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
        self.entry
            .clone()
            .filter(|e| e.user_id == user_id && e.movie_id == movie_id)
            .ok_or(WatchlistError::NotFound)
    }
}
