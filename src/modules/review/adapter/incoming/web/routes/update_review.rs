use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_review::map_review_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::review::application::ports::outgoing::ReviewPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Update a review
///
/// Only the review's author or an admin may edit it.
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{review_id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("review_id" = Uuid, Path, description = "Review id")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Updated review"),
        (status = 400, description = "Invalid rating or comment", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither author nor admin", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[put("/api/v1/reviews/{review_id}")]
pub async fn update_review_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let req = req.into_inner();
    let patch = ReviewPatch {
        rating: req.rating,
        comment: req.comment,
    };

    let review_id = path.into_inner();
    match data
        .review_use_cases
        .update(&user.actor(), review_id, patch)
        .await
    {
        Ok(review) => {
            info!(review_id = %review.id, "Review updated");
            ApiResponse::success(review)
        }
        Err(e) => map_review_error(e),
    }
}
