use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::review::application::use_cases::{
    CreateReviewCommand, ReviewError, ReviewFieldError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub movie_id: Uuid,

    /// Must match the authenticated user.
    pub user_id: Uuid,

    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: i32,

    #[schema(example = "Tense and quiet at once.")]
    pub comment: String,
}

pub(super) fn map_field_error(err: ReviewFieldError) -> HttpResponse {
    let code = match err {
        ReviewFieldError::InvalidRating => "INVALID_RATING",
        ReviewFieldError::InvalidComment => "INVALID_COMMENT",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

pub(super) fn map_review_error(err: ReviewError) -> HttpResponse {
    match err {
        ReviewError::Forbidden => {
            warn!("Review mutation denied");
            ApiResponse::forbidden("NOT_RESOURCE_OWNER", "Not allowed to act on this review")
        }

        ReviewError::NotFound => ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found"),

        ReviewError::InvalidField(field_err) => map_field_error(field_err),

        ReviewError::RepositoryError(msg) => {
            error!(error = %msg, "Review operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Post a review
///
/// The payload's `user_id` must be the authenticated user's own id; no
/// one, admins included, can file a review under another identity.
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created"),
        (status = 400, description = "Invalid rating or comment", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Declared user_id is not the caller", body = ErrorResponse),
    )
)]
#[post("/api/v1/reviews")]
pub async fn create_review_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let req = req.into_inner();
    let command =
        match CreateReviewCommand::new(req.movie_id, req.user_id, req.rating, req.comment) {
            Ok(command) => command,
            Err(e) => return map_field_error(e),
        };

    match data.review_use_cases.create(&user.actor(), command).await {
        Ok(review) => {
            info!(review_id = %review.id, movie_id = %review.movie_id, "Review created");
            ApiResponse::created(review)
        }
        Err(e) => map_review_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        fixed_user_id, token_provider_data, MockReviewUseCases, StubResolver,
    };
    use actix_web::{test, App};
    use std::sync::Arc;

    async fn call(body: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_review_use_cases(Arc::new(MockReviewUseCases::empty()))
            .with_current_user_resolver(Arc::new(StubResolver::active_user("moviefan42")))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data("moviefan42"))
                .service(create_review_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/reviews")
            .insert_header(("Authorization", "Bearer any-token"))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    fn payload(user_id: Uuid) -> serde_json::Value {
        serde_json::json!({
            "movie_id": Uuid::new_v4(),
            "user_id": user_id,
            "rating": 4,
            "comment": "Tense and quiet at once."
        })
    }

    #[actix_web::test]
    async fn test_create_review_as_self_returns_201() {
        let (status, body) = call(payload(fixed_user_id())).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["rating"], 4);
        assert_eq!(body["data"]["user_id"], fixed_user_id().to_string());
    }

    #[actix_web::test]
    async fn test_create_review_with_foreign_user_id_is_403() {
        let (status, body) = call(payload(Uuid::new_v4())).await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "NOT_RESOURCE_OWNER");
    }

    #[actix_web::test]
    async fn test_create_review_out_of_range_rating_is_400() {
        let mut body = payload(fixed_user_id());
        body["rating"] = serde_json::json!(6);

        let (status, body) = call(body).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_RATING");
    }

    #[actix_web::test]
    async fn test_create_review_oversized_comment_is_400() {
        let mut body = payload(fixed_user_id());
        body["comment"] = serde_json::json!("x".repeat(501));

        let (status, body) = call(body).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_COMMENT");
    }
}
