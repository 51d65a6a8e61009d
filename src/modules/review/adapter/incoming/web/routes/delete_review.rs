use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::create_review::map_review_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a review
///
/// Only the review's author or an admin. Responds with the removed record.
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{review_id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("review_id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Deleted review"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither author nor admin", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/reviews/{review_id}")]
pub async fn delete_review_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match data
        .review_use_cases
        .delete(&user.actor(), path.into_inner())
        .await
    {
        Ok(review) => {
            info!(review_id = %review.id, "Review deleted");
            ApiResponse::success(review)
        }
        Err(e) => map_review_error(e),
    }
}
