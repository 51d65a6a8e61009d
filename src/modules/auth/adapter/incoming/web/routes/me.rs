use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::auth::application::domain::entities::UserProfile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch the authenticated user's own profile
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Account deactivated", body = ErrorResponse),
    )
)]
#[get("/api/v1/auth/me")]
pub async fn current_user_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    ApiResponse::success(UserProfile::from(user))
}
