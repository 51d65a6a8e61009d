use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::auth::application::use_cases::update_profile::{ProfilePatchError, UpdateProfileError};
use crate::auth::application::ports::outgoing::UserPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial profile update; absent fields are left unchanged.
#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "moviefan42")]
    pub username: Option<String>,

    #[schema(example = "fan@example.com")]
    pub email: Option<String>,

    #[schema(example = "Jamie Doe")]
    pub full_name: Option<String>,
}

fn map_update_error(err: UpdateProfileError, target: Uuid) -> HttpResponse {
    match &err {
        UpdateProfileError::NotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        UpdateProfileError::Forbidden => {
            warn!(target = %target, "Profile update denied");
            ApiResponse::forbidden("NOT_RESOURCE_OWNER", "Not allowed to modify this profile")
        }

        UpdateProfileError::InvalidPatch(patch_err) => {
            let code = match patch_err {
                ProfilePatchError::InvalidUsername => "INVALID_USERNAME",
                ProfilePatchError::InvalidEmail => "INVALID_EMAIL",
                ProfilePatchError::FullNameTooLong => "INVALID_FULL_NAME",
            };
            ApiResponse::bad_request(code, &patch_err.to_string())
        }

        UpdateProfileError::RepositoryError(msg) => {
            error!(target = %target, error = %msg, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update a user profile
///
/// The owner may update their own profile; admins may update anyone's.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner or an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/{user_id}")]
pub async fn update_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let target = path.into_inner();
    let req = req.into_inner();
    let patch = UserPatch {
        username: req.username,
        email: req.email,
        full_name: req.full_name,
    };

    match data
        .update_profile_use_case
        .execute(&user.actor(), target, patch)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_update_error(e, target),
    }
}
