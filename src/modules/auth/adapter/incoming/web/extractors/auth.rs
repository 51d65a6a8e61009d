use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::User;
use crate::auth::application::helpers::ResolveUserError;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Proof that the request carried a valid bearer token. The subject is a
/// username; whether that user still exists (and is active) is checked per
/// request via [`resolve_current_user_or_response`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service = match req.app_data::<web::Data<Arc<dyn TokenProvider>>>() {
            Some(service) => service,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                username: claims.sub,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Looks up the token subject and rejects requests from deleted or
/// deactivated accounts.
pub async fn resolve_current_user_or_response(
    data: &web::Data<AppState>,
    username: &str,
) -> Result<User, HttpResponse> {
    match data.current_user_resolver.resolve(username).await {
        Ok(user) => Ok(user),

        Err(ResolveUserError::UnknownUser) => Err(ApiResponse::unauthorized(
            "UNKNOWN_USER",
            "Could not validate credentials",
        )),

        Err(ResolveUserError::InactiveUser) => Err(ApiResponse::forbidden(
            "INACTIVE_USER",
            "Account is deactivated",
        )),

        Err(ResolveUserError::QueryError(msg)) => {
            tracing::error!("Query error resolving username {}: {}", username, msg);
            Err(ApiResponse::internal_error())
        }
    }
}
