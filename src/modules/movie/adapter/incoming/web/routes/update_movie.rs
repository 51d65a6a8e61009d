use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_movie::map_movie_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::movie::application::ports::outgoing::MoviePatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial movie update; absent fields are left unchanged.
#[derive(Deserialize, ToSchema)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<i32>,
}

/// Update a movie (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/movies/{movie_id}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(("movie_id" = Uuid, Path, description = "Movie id")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Updated movie"),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
#[put("/api/v1/movies/{movie_id}")]
pub async fn update_movie_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateMovieRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let req = req.into_inner();
    let patch = MoviePatch {
        title: req.title,
        description: req.description,
        release_year: req.release_year,
    };

    match data
        .movie_use_cases
        .update(&user.actor(), path.into_inner(), patch)
        .await
    {
        Ok(movie) => ApiResponse::success(movie),
        Err(e) => map_movie_error(e),
    }
}
