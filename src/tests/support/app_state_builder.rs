//! Builds an [`AppState`] for handler tests. Every collaborator defaults
//! to a panicking stub, so a test only wires the pieces its route touches
//! and anything else being called is an immediate, loud failure.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserProfile};
use crate::auth::application::domain::policy::Actor;
use crate::auth::application::helpers::{CurrentUserResolver, ResolveUserError};
use crate::auth::application::ports::outgoing::UserPatch;
use crate::auth::application::use_cases::{
    delete_user::{DeleteUserError, IDeleteUserUseCase},
    fetch_user::{FetchUserError, IFetchUserUseCase},
    list_users::{IListUsersUseCase, ListUsersError},
    login_user::{ILoginUserUseCase, LoginCommand, LoginError, LoginUserResponse},
    refresh_token::{IRefreshTokenUseCase, RefreshError, TokenResponse},
    register_user::{IRegisterUserUseCase, RegisterUserCommand, RegisterUserError},
    update_profile::{IUpdateProfileUseCase, UpdateProfileError},
};
use crate::movie::application::ports::outgoing::MoviePatch;
use crate::movie::application::use_cases::{CreateMovieCommand, IMovieUseCases, MovieError};
use crate::movie::domain::entities::Movie;
use crate::review::application::ports::outgoing::ReviewPatch;
use crate::review::application::use_cases::{CreateReviewCommand, IReviewUseCases, ReviewError};
use crate::review::domain::entities::Review;
use crate::shared::api::PageParams;
use crate::watchlist::application::use_cases::{IWatchlistUseCases, WatchlistError};
use crate::watchlist::domain::entities::WatchlistEntry;
use crate::AppState;

/// Stands in for every collaborator a test did not wire explicitly.
struct Unstubbed;

#[async_trait]
impl IRegisterUserUseCase for Unstubbed {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<UserProfile, RegisterUserError> {
        panic!("register use case was not stubbed for this test");
    }
}

#[async_trait]
impl ILoginUserUseCase for Unstubbed {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginUserResponse, LoginError> {
        panic!("login use case was not stubbed for this test");
    }
}

#[async_trait]
impl IRefreshTokenUseCase for Unstubbed {
    async fn execute(&self, _username: &str) -> Result<TokenResponse, RefreshError> {
        panic!("refresh use case was not stubbed for this test");
    }
}

#[async_trait]
impl IFetchUserUseCase for Unstubbed {
    async fn by_id(&self, _user_id: Uuid) -> Result<UserProfile, FetchUserError> {
        panic!("fetch user use case was not stubbed for this test");
    }

    async fn by_username(&self, _username: &str) -> Result<UserProfile, FetchUserError> {
        panic!("fetch user use case was not stubbed for this test");
    }
}

#[async_trait]
impl IListUsersUseCase for Unstubbed {
    async fn execute(
        &self,
        _actor: &Actor,
        _page: PageParams,
    ) -> Result<Vec<UserProfile>, ListUsersError> {
        panic!("list users use case was not stubbed for this test");
    }
}

#[async_trait]
impl IUpdateProfileUseCase for Unstubbed {
    async fn execute(
        &self,
        _actor: &Actor,
        _target: Uuid,
        _patch: UserPatch,
    ) -> Result<UserProfile, UpdateProfileError> {
        panic!("update profile use case was not stubbed for this test");
    }
}

#[async_trait]
impl IDeleteUserUseCase for Unstubbed {
    async fn execute(&self, _actor: &Actor, _target: Uuid) -> Result<UserProfile, DeleteUserError> {
        panic!("delete user use case was not stubbed for this test");
    }
}

#[async_trait]
impl CurrentUserResolver for Unstubbed {
    async fn resolve(&self, _username: &str) -> Result<User, ResolveUserError> {
        panic!("current user resolver was not stubbed for this test");
    }
}

#[async_trait]
impl IMovieUseCases for Unstubbed {
    async fn create(
        &self,
        _actor: &Actor,
        _command: CreateMovieCommand,
    ) -> Result<Movie, MovieError> {
        panic!("movie use cases were not stubbed for this test");
    }

    async fn list(&self, _page: PageParams) -> Result<Vec<Movie>, MovieError> {
        panic!("movie use cases were not stubbed for this test");
    }

    async fn get(&self, _movie_id: Uuid) -> Result<Movie, MovieError> {
        panic!("movie use cases were not stubbed for this test");
    }

    async fn update(
        &self,
        _actor: &Actor,
        _movie_id: Uuid,
        _patch: MoviePatch,
    ) -> Result<Movie, MovieError> {
        panic!("movie use cases were not stubbed for this test");
    }

    async fn delete(&self, _actor: &Actor, _movie_id: Uuid) -> Result<Movie, MovieError> {
        panic!("movie use cases were not stubbed for this test");
    }
}

#[async_trait]
impl IReviewUseCases for Unstubbed {
    async fn create(
        &self,
        _actor: &Actor,
        _command: CreateReviewCommand,
    ) -> Result<Review, ReviewError> {
        panic!("review use cases were not stubbed for this test");
    }

    async fn list(&self, _page: PageParams) -> Result<Vec<Review>, ReviewError> {
        panic!("review use cases were not stubbed for this test");
    }

    async fn get(&self, _review_id: Uuid) -> Result<Review, ReviewError> {
        panic!("review use cases were not stubbed for this test");
    }

    async fn list_by_movie(
        &self,
        _movie_id: Uuid,
        _page: PageParams,
    ) -> Result<Vec<Review>, ReviewError> {
        panic!("review use cases were not stubbed for this test");
    }

    async fn list_by_user(
        &self,
        _user_id: Uuid,
        _page: PageParams,
    ) -> Result<Vec<Review>, ReviewError> {
        panic!("review use cases were not stubbed for this test");
    }

    async fn update(
        &self,
        _actor: &Actor,
        _review_id: Uuid,
        _patch: ReviewPatch,
    ) -> Result<Review, ReviewError> {
        panic!("review use cases were not stubbed for this test");
    }

    async fn delete(&self, _actor: &Actor, _review_id: Uuid) -> Result<Review, ReviewError> {
        panic!("review use cases were not stubbed for this test");
    }
}

#[async_trait]
impl IWatchlistUseCases for Unstubbed {
    async fn add(
        &self,
        _actor: &Actor,
        _user_id: Uuid,
        _movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistError> {
        panic!("watchlist use cases were not stubbed for this test");
    }

    async fn list_for_user(
        &self,
        _actor: &Actor,
        _user_id: Uuid,
        _page: PageParams,
    ) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        panic!("watchlist use cases were not stubbed for this test");
    }

    async fn contains(
        &self,
        _actor: &Actor,
        _user_id: Uuid,
        _movie_id: Uuid,
    ) -> Result<bool, WatchlistError> {
        panic!("watchlist use cases were not stubbed for this test");
    }

    async fn remove(
        &self,
        _actor: &Actor,
        _user_id: Uuid,
        _movie_id: Uuid,
    ) -> Result<WatchlistEntry, WatchlistError> {
        panic!("watchlist use cases were not stubbed for this test");
    }
}

pub struct TestAppStateBuilder {
    register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    current_user_resolver: Arc<dyn CurrentUserResolver>,
    movie_use_cases: Arc<dyn IMovieUseCases + Send + Sync>,
    review_use_cases: Arc<dyn IReviewUseCases + Send + Sync>,
    watchlist_use_cases: Arc<dyn IWatchlistUseCases + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user_use_case: Arc::new(Unstubbed),
            login_user_use_case: Arc::new(Unstubbed),
            refresh_token_use_case: Arc::new(Unstubbed),
            fetch_user_use_case: Arc::new(Unstubbed),
            list_users_use_case: Arc::new(Unstubbed),
            update_profile_use_case: Arc::new(Unstubbed),
            delete_user_use_case: Arc::new(Unstubbed),
            current_user_resolver: Arc::new(Unstubbed),
            movie_use_cases: Arc::new(Unstubbed),
            review_use_cases: Arc::new(Unstubbed),
            watchlist_use_cases: Arc::new(Unstubbed),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user_use_case(
        mut self,
        use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    ) -> Self {
        self.register_user_use_case = use_case;
        self
    }

    pub fn with_login_user_use_case(
        mut self,
        use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    ) -> Self {
        self.login_user_use_case = use_case;
        self
    }

    pub fn with_refresh_token_use_case(
        mut self,
        use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    ) -> Self {
        self.refresh_token_use_case = use_case;
        self
    }

    pub fn with_fetch_user_use_case(
        mut self,
        use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_user_use_case = use_case;
        self
    }

    pub fn with_list_users_use_case(
        mut self,
        use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    ) -> Self {
        self.list_users_use_case = use_case;
        self
    }

    pub fn with_update_profile_use_case(
        mut self,
        use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    ) -> Self {
        self.update_profile_use_case = use_case;
        self
    }

    pub fn with_delete_user_use_case(
        mut self,
        use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    ) -> Self {
        self.delete_user_use_case = use_case;
        self
    }

    pub fn with_current_user_resolver(
        mut self,
        resolver: Arc<dyn CurrentUserResolver>,
    ) -> Self {
        self.current_user_resolver = resolver;
        self
    }

    pub fn with_movie_use_cases(
        mut self,
        use_cases: Arc<dyn IMovieUseCases + Send + Sync>,
    ) -> Self {
        self.movie_use_cases = use_cases;
        self
    }

    pub fn with_review_use_cases(
        mut self,
        use_cases: Arc<dyn IReviewUseCases + Send + Sync>,
    ) -> Self {
        self.review_use_cases = use_cases;
        self
    }

    pub fn with_watchlist_use_cases(
        mut self,
        use_cases: Arc<dyn IWatchlistUseCases + Send + Sync>,
    ) -> Self {
        self.watchlist_use_cases = use_cases;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user_use_case,
            login_user_use_case: self.login_user_use_case,
            refresh_token_use_case: self.refresh_token_use_case,
            fetch_user_use_case: self.fetch_user_use_case,
            list_users_use_case: self.list_users_use_case,
            update_profile_use_case: self.update_profile_use_case,
            delete_user_use_case: self.delete_user_use_case,
            current_user_resolver: self.current_user_resolver,
            movie_use_cases: self.movie_use_cases,
            review_use_cases: self.review_use_cases,
            watchlist_use_cases: self.watchlist_use_cases,
        })
    }
}
