use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::create_review::map_review_error;
use crate::api::schemas::ErrorResponse;
use crate::shared::api::{ApiResponse, PageParams};
use crate::AppState;

/// List reviews
///
/// Public; no Authorization header required.
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = "reviews",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Page of reviews"),
    )
)]
#[get("/api/v1/reviews")]
pub async fn list_reviews_handler(
    page: web::Query<PageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.review_use_cases.list(page.into_inner()).await {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(e) => map_review_error(e),
    }
}

/// Fetch a single review
#[utoipa::path(
    get,
    path = "/api/v1/reviews/{review_id}",
    tag = "reviews",
    params(("review_id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review"),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/reviews/{review_id}")]
pub async fn fetch_review_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.review_use_cases.get(path.into_inner()).await {
        Ok(review) => ApiResponse::success(review),
        Err(e) => map_review_error(e),
    }
}
