use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::create_movie::map_movie_error;
use crate::api::schemas::ErrorResponse;
use crate::shared::api::{ApiResponse, PageParams};
use crate::AppState;

/// List movies
///
/// Public; no Authorization header required.
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    tag = "movies",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Page of movies"),
    )
)]
#[get("/api/v1/movies")]
pub async fn list_movies_handler(
    page: web::Query<PageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.movie_use_cases.list(page.into_inner()).await {
        Ok(movies) => ApiResponse::success(movies),
        Err(e) => map_movie_error(e),
    }
}

/// Fetch a single movie
#[utoipa::path(
    get,
    path = "/api/v1/movies/{movie_id}",
    tag = "movies",
    params(("movie_id" = Uuid, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie"),
        (status = 404, description = "Movie not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/movies/{movie_id}")]
pub async fn fetch_movie_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.movie_use_cases.get(path.into_inner()).await {
        Ok(movie) => ApiResponse::success(movie),
        Err(e) => map_movie_error(e),
    }
}
