use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::application::domain::entities::UserProfile;
use crate::movie::domain::entities::Movie;
use crate::review::domain::entities::Review;
use crate::watchlist::domain::entities::WatchlistEntry;

use crate::auth::adapter::incoming::web::routes as auth_routes;
use crate::movie::adapter::incoming::web::routes as movie_routes;
use crate::review::adapter::incoming::web::routes as review_routes;
use crate::watchlist::adapter::incoming::web::routes as watchlist_routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CineVerse API",
        description = "Movie catalogue with user reviews and personal watchlists",
        version = "1.0.0"
    ),
    paths(
        auth_routes::register_user::register_user_handler,
        auth_routes::login_user::login_user_handler,
        auth_routes::me::current_user_handler,
        auth_routes::refresh_token::refresh_token_handler,
        auth_routes::fetch_user::fetch_user_by_id_handler,
        auth_routes::fetch_user::fetch_user_by_username_handler,
        auth_routes::list_users::list_users_handler,
        auth_routes::update_user::update_user_handler,
        auth_routes::delete_user::delete_user_handler,
        movie_routes::create_movie::create_movie_handler,
        movie_routes::fetch_movie::list_movies_handler,
        movie_routes::fetch_movie::fetch_movie_handler,
        movie_routes::update_movie::update_movie_handler,
        movie_routes::delete_movie::delete_movie_handler,
        review_routes::create_review::create_review_handler,
        review_routes::fetch_review::list_reviews_handler,
        review_routes::fetch_review::fetch_review_handler,
        review_routes::nested_reviews::movie_reviews_handler,
        review_routes::nested_reviews::user_reviews_handler,
        review_routes::update_review::update_review_handler,
        review_routes::delete_review::delete_review_handler,
        watchlist_routes::add_entry::add_watchlist_entry_handler,
        watchlist_routes::list_watchlist::user_watchlist_handler,
        watchlist_routes::check_entry::check_watchlist_entry_handler,
        watchlist_routes::remove_entry::remove_watchlist_entry_handler,
    ),
    components(schemas(
        UserProfile,
        Movie,
        Review,
        WatchlistEntry,
        ErrorResponse,
        ErrorDetail,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and session endpoints"),
        (name = "users", description = "User profiles"),
        (name = "movies", description = "Movie catalogue"),
        (name = "reviews", description = "Movie reviews"),
        (name = "watchlist", description = "Personal watchlists"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
