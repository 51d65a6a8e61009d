use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::create_movie::map_movie_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove a movie from the catalogue (admin only)
///
/// Returns the removed record. Reviews and watchlist entries referencing
/// it are removed by the database cascade.
#[utoipa::path(
    delete,
    path = "/api/v1/movies/{movie_id}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("movie_id" = Uuid, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Deleted movie"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/movies/{movie_id}")]
pub async fn delete_movie_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let movie_id = path.into_inner();
    match data.movie_use_cases.delete(&user.actor(), movie_id).await {
        Ok(movie) => {
            info!(movie_id = %movie_id, "Movie deleted");
            ApiResponse::success(movie)
        }
        Err(e) => map_movie_error(e),
    }
}
