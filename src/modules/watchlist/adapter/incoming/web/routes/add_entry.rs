use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::watchlist::application::use_cases::WatchlistError;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct AddWatchlistEntryRequest {
    /// Must match the authenticated user.
    pub user_id: Uuid,
    pub movie_id: Uuid,
}

pub(super) fn map_watchlist_error(err: WatchlistError) -> HttpResponse {
    match err {
        WatchlistError::Forbidden => {
            warn!("Watchlist access denied");
            ApiResponse::forbidden("NOT_RESOURCE_OWNER", "Not allowed to act on this watchlist")
        }

        WatchlistError::NotFound => {
            ApiResponse::not_found("WATCHLIST_ENTRY_NOT_FOUND", "Movie not in watchlist")
        }

        WatchlistError::RepositoryError(msg) => {
            error!(error = %msg, "Watchlist operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Add a movie to the caller's watchlist
///
/// Idempotent: re-adding a movie responds with the entry created the
/// first time, same id included.
#[utoipa::path(
    post,
    path = "/api/v1/watchlist",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    request_body = AddWatchlistEntryRequest,
    responses(
        (status = 200, description = "Watchlist entry (new or pre-existing)"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Declared user_id is not the caller", body = ErrorResponse),
    )
)]
#[post("/api/v1/watchlist")]
pub async fn add_watchlist_entry_handler(
    auth: AuthenticatedUser,
    req: web::Json<AddWatchlistEntryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match data
        .watchlist_use_cases
        .add(&user.actor(), req.user_id, req.movie_id)
        .await
    {
        Ok(entry) => {
            info!(entry_id = %entry.id, movie_id = %entry.movie_id, "Watchlist entry added");
            ApiResponse::success(entry)
        }
        Err(e) => map_watchlist_error(e),
    }
}
