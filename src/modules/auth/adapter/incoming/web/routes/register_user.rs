use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::use_cases::register_user::{
    RegisterCommandError, RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Username (unique identifier)
    #[schema(example = "moviefan42")]
    pub username: String,

    /// Email address
    #[schema(example = "fan@example.com")]
    pub email: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Optional display name
    #[schema(example = "Jamie Doe")]
    pub full_name: Option<String>,
}

fn map_command_error(err: RegisterCommandError, req: &RegisterUserRequest) -> HttpResponse {
    warn!(
        username = %req.username,
        email = %req.email,
        error = %err,
        "Invalid registration input"
    );

    let code = match err {
        RegisterCommandError::InvalidUsername => "INVALID_USERNAME",
        RegisterCommandError::InvalidEmail => "INVALID_EMAIL",
        RegisterCommandError::PasswordTooShort => "INVALID_PASSWORD",
        RegisterCommandError::FullNameTooLong => "INVALID_FULL_NAME",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::UsernameTaken => {
            warn!(username = %req.username, "Username already registered");
            ApiResponse::bad_request("USERNAME_TAKEN", "Username already registered")
        }

        RegisterUserError::EmailTaken => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::bad_request("EMAIL_TAKEN", "Email already registered")
        }

        other => {
            error!(
                username = %req.username,
                error = %other,
                "User registration failed"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates a new account. Usernames and email addresses are unique; the
/// password is stored only as an Argon2 hash.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User created",
            body = inline(SuccessResponse<UserProfile>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "moviefan42",
                    "email": "fan@example.com",
                    "full_name": "Jamie Doe",
                    "is_active": true,
                    "is_admin": false,
                    "created_at": "2025-08-10T12:00:00Z"
                }
            })
        ),
        (
            status = 400,
            description = "Validation error or duplicate username/email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USERNAME_TAKEN",
                    "message": "Username already registered"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "User registration attempt");

    let command = match RegisterUserCommand::new(
        req.username.clone(),
        req.email.clone(),
        req.password.clone(),
        req.full_name.clone(),
    ) {
        Ok(command) => command,
        Err(e) => return map_command_error(e, &req),
    };

    match data.register_user_use_case.execute(command).await {
        Ok(profile) => {
            info!(user_id = %profile.id, username = %profile.username, "User created");
            ApiResponse::created(profile)
        }
        Err(e) => map_register_error(e, &req),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockRegisterSuccess;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterSuccess {
        async fn execute(
            &self,
            command: RegisterUserCommand,
        ) -> Result<UserProfile, RegisterUserError> {
            Ok(UserProfile {
                id: Uuid::new_v4(),
                username: command.username().to_string(),
                email: command.email().to_string(),
                full_name: None,
                is_active: true,
                is_admin: false,
                created_at: Utc::now(),
            })
        }
    }

    struct MockRegisterUsernameTaken;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterUsernameTaken {
        async fn execute(
            &self,
            _: RegisterUserCommand,
        ) -> Result<UserProfile, RegisterUserError> {
            Err(RegisterUserError::UsernameTaken)
        }
    }

    struct MockRegisterRepositoryError;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterRepositoryError {
        async fn execute(
            &self,
            _: RegisterUserCommand,
        ) -> Result<UserProfile, RegisterUserError> {
            Err(RegisterUserError::RepositoryError("down".to_string()))
        }
    }

    fn request_body() -> serde_json::Value {
        serde_json::json!({
            "username": "moviefan42",
            "email": "fan@example.com",
            "password": "SecurePass123!",
            "full_name": "Jamie Doe"
        })
    }

    async fn call(
        use_case: impl IRegisterUserUseCase + 'static,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_register_user_use_case(Arc::new(use_case))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_register_success_returns_201() {
        let (status, body) = call(MockRegisterSuccess, request_body()).await;

        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["username"], "moviefan42");
        assert_eq!(body["data"]["email"], "fan@example.com");
        assert!(body["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_register_short_password_rejected() {
        let mut payload = request_body();
        payload["password"] = serde_json::json!("short");

        let (status, body) = call(MockRegisterSuccess, payload).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_PASSWORD");
    }

    #[actix_web::test]
    async fn test_register_invalid_email_rejected() {
        let mut payload = request_body();
        payload["email"] = serde_json::json!("not-an-email");

        let (status, body) = call(MockRegisterSuccess, payload).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn test_register_duplicate_username_is_400() {
        let (status, body) = call(MockRegisterUsernameTaken, request_body()).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
    }

    #[actix_web::test]
    async fn test_register_repository_error_is_500() {
        let (status, body) = call(MockRegisterRepositoryError, request_body()).await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
