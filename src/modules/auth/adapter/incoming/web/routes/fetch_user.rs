use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::fetch_user::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_fetch_error(err: FetchUserError) -> HttpResponse {
    match err {
        FetchUserError::NotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        FetchUserError::QueryError(msg) => {
            error!(error = %msg, "User lookup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Fetch a user profile by id
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile"),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{user_id}")]
pub async fn fetch_user_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_use_case.by_id(path.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_fetch_error(e),
    }
}

/// Fetch a user profile by username
#[utoipa::path(
    get,
    path = "/api/v1/users/username/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User profile"),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/username/{username}")]
pub async fn fetch_user_by_username_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_use_case.by_username(&path).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_fetch_error(e),
    }
}
