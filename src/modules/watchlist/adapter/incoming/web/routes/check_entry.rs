use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::add_entry::map_watchlist_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct WatchlistMembership {
    pub in_watchlist: bool,
}

/// Check whether a movie is in the caller's watchlist
#[utoipa::path(
    get,
    path = "/api/v1/watchlist/{user_id}/{movie_id}",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = Uuid, Path, description = "User id, must be the caller"),
        ("movie_id" = Uuid, Path, description = "Movie id"),
    ),
    responses(
        (status = 200, description = "Membership flag", body = WatchlistMembership),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Declared user_id is not the caller", body = ErrorResponse),
    )
)]
#[get("/api/v1/watchlist/{user_id}/{movie_id}")]
pub async fn check_watchlist_entry_handler(
    auth: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let (user_id, movie_id) = path.into_inner();
    match data
        .watchlist_use_cases
        .contains(&user.actor(), user_id, movie_id)
        .await
    {
        Ok(in_watchlist) => ApiResponse::success(WatchlistMembership { in_watchlist }),
        Err(e) => map_watchlist_error(e),
    }
}
