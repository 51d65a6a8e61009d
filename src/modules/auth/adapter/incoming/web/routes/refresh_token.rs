use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::refresh_token::RefreshError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_refresh_error(err: RefreshError, username: &str) -> HttpResponse {
    match &err {
        RefreshError::UnknownUser => {
            warn!(username = %username, "Refresh for unknown user");
            ApiResponse::unauthorized("UNKNOWN_USER", "Could not validate credentials")
        }

        RefreshError::InactiveUser => {
            warn!(username = %username, "Refresh for deactivated account");
            ApiResponse::forbidden("INACTIVE_USER", "Account is deactivated")
        }

        other => {
            error!(username = %username, error = %other, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}

/// Exchange a valid bearer token for a fresh one
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "New access token issued"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Account deactivated", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/refresh")]
pub async fn refresh_token_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.refresh_token_use_case.execute(&auth.username).await {
        Ok(tokens) => ApiResponse::success(tokens),
        Err(e) => map_refresh_error(e, &auth.username),
    }
}
