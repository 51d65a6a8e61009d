use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_user::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Form-encoded credentials, as submitted by the Swagger UI authorize
/// dialog and standard OAuth2 password-flow clients.
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    #[schema(example = "moviefan42")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

fn map_login_error(err: LoginError, username: &str) -> HttpResponse {
    match &err {
        LoginError::InvalidCredentials => {
            warn!(username = %username, "Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Incorrect username or password")
        }

        LoginError::InactiveUser => {
            warn!(username = %username, "Login attempt on deactivated account");
            ApiResponse::forbidden("INACTIVE_USER", "Account is deactivated")
        }

        other => {
            error!(username = %username, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with username and password
///
/// Issues a bearer token on success. Unknown usernames and wrong passwords
/// produce the same 401; a deactivated account is a distinct 403.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (
            status = 200,
            description = "Login successful",
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiJ9...",
                    "token_type": "bearer",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "moviefan42",
                        "email": "fan@example.com",
                        "full_name": "Jamie Doe",
                        "is_active": true,
                        "is_admin": false,
                        "created_at": "2025-08-10T12:00:00Z"
                    }
                }
            })
        ),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account deactivated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    form: web::Form<LoginForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();
    info!(username = %form.username, "Login attempt");

    let command = LoginCommand {
        username: form.username.clone(),
        password: form.password,
    };

    match data.login_user_use_case.execute(command).await {
        Ok(response) => {
            info!(username = %form.username, "Login successful");
            ApiResponse::success(response)
        }
        Err(e) => map_login_error(e, &form.username),
    }
}
