use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::auth::application::use_cases::list_users::ListUsersError;
use crate::shared::api::{ApiResponse, PageParams};
use crate::AppState;

fn map_list_error(err: ListUsersError) -> HttpResponse {
    match err {
        ListUsersError::Forbidden => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin privileges required")
        }
        ListUsersError::QueryError(msg) => {
            error!(error = %msg, "User listing failed");
            ApiResponse::internal_error()
        }
    }
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Page of user profiles"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/v1/users")]
pub async fn list_users_handler(
    auth: AuthenticatedUser,
    page: web::Query<PageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match data
        .list_users_use_case
        .execute(&user.actor(), page.into_inner())
        .await
    {
        Ok(profiles) => ApiResponse::success(profiles),
        Err(e) => map_list_error(e),
    }
}
