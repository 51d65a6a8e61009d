use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::add_entry::map_watchlist_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::shared::api::{ApiResponse, PageParams};
use crate::AppState;

/// List a user's watchlist
///
/// Only the list's owner or an admin may read it.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/watchlist",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("skip" = Option<u64>, Query, description = "Records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Watchlist entries"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither owner nor admin", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{user_id}/watchlist")]
pub async fn user_watchlist_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    page: web::Query<PageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match data
        .watchlist_use_cases
        .list_for_user(&user.actor(), path.into_inner(), page.into_inner())
        .await
    {
        Ok(entries) => ApiResponse::success(entries),
        Err(e) => map_watchlist_error(e),
    }
}
