use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::create_review::map_review_error;
use crate::shared::api::{ApiResponse, PageParams};
use crate::AppState;

/// List a movie's reviews
///
/// Public. An unknown movie id simply yields an empty page.
#[utoipa::path(
    get,
    path = "/api/v1/movies/{movie_id}/reviews",
    tag = "reviews",
    params(
        ("movie_id" = Uuid, Path, description = "Movie id"),
        ("skip" = Option<u64>, Query, description = "Records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Reviews for the movie"),
    )
)]
#[get("/api/v1/movies/{movie_id}/reviews")]
pub async fn movie_reviews_handler(
    path: web::Path<Uuid>,
    page: web::Query<PageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .review_use_cases
        .list_by_movie(path.into_inner(), page.into_inner())
        .await
    {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(e) => map_review_error(e),
    }
}

/// List a user's reviews
///
/// Public. An unknown user id simply yields an empty page.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/reviews",
    tag = "reviews",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("skip" = Option<u64>, Query, description = "Records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Reviews written by the user"),
    )
)]
#[get("/api/v1/users/{user_id}/reviews")]
pub async fn user_reviews_handler(
    path: web::Path<Uuid>,
    page: web::Query<PageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .review_use_cases
        .list_by_user(path.into_inner(), page.into_inner())
        .await
    {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(e) => map_review_error(e),
    }
}
