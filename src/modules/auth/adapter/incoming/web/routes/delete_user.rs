use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_delete_error(err: DeleteUserError, target: Uuid) -> HttpResponse {
    match &err {
        DeleteUserError::NotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        DeleteUserError::Forbidden => {
            warn!(target = %target, "Account deletion denied");
            ApiResponse::forbidden("NOT_RESOURCE_OWNER", "Not allowed to delete this profile")
        }

        DeleteUserError::RepositoryError(msg) => {
            error!(target = %target, error = %msg, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}

/// Delete a user account
///
/// Hard delete; reviews and watchlist entries go with it. Returns the
/// removed profile. The owner may delete their own account, admins anyone's.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted profile"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner or an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/users/{user_id}")]
pub async fn delete_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let target = path.into_inner();
    match data
        .delete_user_use_case
        .execute(&user.actor(), target)
        .await
    {
        Ok(profile) => {
            info!(user_id = %target, "User deleted");
            ApiResponse::success(profile)
        }
        Err(e) => map_delete_error(e, target),
    }
}
