pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::movie;
pub use modules::review;
pub use modules::watchlist;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::helpers::{CurrentUserResolver, UserQueryResolver};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    fetch_user::{FetchUserUseCase, IFetchUserUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use crate::movie::adapter::outgoing::movie_repository_postgres::MovieRepositoryPostgres;
use crate::movie::application::use_cases::{IMovieUseCases, MovieService};
use crate::review::adapter::outgoing::review_repository_postgres::ReviewRepositoryPostgres;
use crate::review::application::use_cases::{IReviewUseCases, ReviewService};
use crate::watchlist::adapter::outgoing::watchlist_repository_postgres::WatchlistRepositoryPostgres;
use crate::watchlist::application::use_cases::{IWatchlistUseCases, WatchlistService};

use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub current_user_resolver: Arc<dyn CurrentUserResolver>,
    pub movie_use_cases: Arc<dyn IMovieUseCases + Send + Sync>,
    pub review_use_cases: Arc<dyn IReviewUseCases + Send + Sync>,
    pub watchlist_use_cases: Arc<dyn IWatchlistUseCases + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        panic!("Configuration error: {e}");
    });
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let jwt_service = JwtTokenService::new(JwtConfig::from_app_config(&config));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);

    let current_user_resolver: Arc<dyn CurrentUserResolver> =
        Arc::new(UserQueryResolver::new(user_query.clone()));

    // Auth use cases
    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&password_hasher),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let refresh_token_use_case = RefreshTokenUseCase::new(
        Arc::clone(&current_user_resolver),
        Arc::clone(&token_provider),
    );
    let fetch_user_use_case = FetchUserUseCase::new(user_query.clone());
    let list_users_use_case = ListUsersUseCase::new(user_query.clone());
    let update_profile_use_case = UpdateProfileUseCase::new(user_query.clone(), user_repo.clone());
    let delete_user_use_case = DeleteUserUseCase::new(user_query, user_repo);

    // Catalogue services
    let movie_use_cases = MovieService::new(MovieRepositoryPostgres::new(Arc::clone(&db_arc)));
    let review_use_cases = ReviewService::new(ReviewRepositoryPostgres::new(Arc::clone(&db_arc)));
    let watchlist_use_cases =
        WatchlistService::new(WatchlistRepositoryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        fetch_user_use_case: Arc::new(fetch_user_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        current_user_resolver,
        movie_use_cases: Arc::new(movie_use_cases),
        review_use_cases: Arc::new(review_use_cases),
        watchlist_use_cases: Arc::new(watchlist_use_cases),
    };

    let cors_origins = config.cors_origins.clone();
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .max_age(3600);
        for origin in &cors_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user_by_username_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user_by_id_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Movies
    cfg.service(crate::movie::adapter::incoming::web::routes::create_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::list_movies_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::fetch_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::update_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::delete_movie_handler);
    // Reviews
    cfg.service(crate::review::adapter::incoming::web::routes::create_review_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::list_reviews_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::fetch_review_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::movie_reviews_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::user_reviews_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::update_review_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::delete_review_handler);
    // Watchlist
    cfg.service(crate::watchlist::adapter::incoming::web::routes::add_watchlist_entry_handler);
    cfg.service(crate::watchlist::adapter::incoming::web::routes::user_watchlist_handler);
    cfg.service(crate::watchlist::adapter::incoming::web::routes::check_watchlist_entry_handler);
    cfg.service(crate::watchlist::adapter::incoming::web::routes::remove_watchlist_entry_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
