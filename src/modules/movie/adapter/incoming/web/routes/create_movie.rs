use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::movie::application::use_cases::{CreateMovieCommand, MovieError, MovieFieldError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    #[schema(example = "Arrival")]
    pub title: String,

    #[schema(example = "A linguist decodes an alien language.")]
    pub description: String,

    #[schema(example = 2016)]
    pub release_year: i32,
}

pub(super) fn map_field_error(err: MovieFieldError) -> HttpResponse {
    let code = match err {
        MovieFieldError::InvalidTitle => "INVALID_TITLE",
        MovieFieldError::EmptyDescription => "INVALID_DESCRIPTION",
        MovieFieldError::InvalidReleaseYear => "INVALID_RELEASE_YEAR",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

pub(super) fn map_movie_error(err: MovieError) -> HttpResponse {
    match err {
        MovieError::Forbidden => {
            warn!("Movie mutation denied");
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin privileges required")
        }

        MovieError::NotFound => ApiResponse::not_found("MOVIE_NOT_FOUND", "Movie not found"),

        MovieError::InvalidField(field_err) => map_field_error(field_err),

        MovieError::RepositoryError(msg) => {
            error!(error = %msg, "Movie operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Add a movie to the catalogue (admin only)
#[utoipa::path(
    post,
    path = "/api/v1/movies",
    tag = "movies",
    security(("bearer_auth" = [])),
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created"),
        (status = 400, description = "Invalid movie payload", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[post("/api/v1/movies")]
pub async fn create_movie_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateMovieRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let req = req.into_inner();
    let command = match CreateMovieCommand::new(req.title, req.description, req.release_year) {
        Ok(command) => command,
        Err(e) => return map_field_error(e),
    };

    match data.movie_use_cases.create(&user.actor(), command).await {
        Ok(movie) => {
            info!(movie_id = %movie.id, title = %movie.title, "Movie created");
            ApiResponse::created(movie)
        }
        Err(e) => map_movie_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{token_provider_data, MockMovieUseCases, StubResolver};
    use actix_web::{test, App};
    use std::sync::Arc;

    async fn call(resolver: StubResolver, body: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_movie_use_cases(Arc::new(MockMovieUseCases::default()))
            .with_current_user_resolver(Arc::new(resolver))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data("moviefan42"))
                .service(create_movie_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/movies")
            .insert_header(("Authorization", "Bearer any-token"))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "title": "Arrival",
            "description": "A linguist decodes an alien language.",
            "release_year": 2016
        })
    }

    #[actix_web::test]
    async fn test_create_movie_as_admin_returns_201() {
        let (status, body) = call(StubResolver::admin("moviefan42"), payload()).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["title"], "Arrival");
    }

    #[actix_web::test]
    async fn test_create_movie_as_member_is_403() {
        let (status, body) = call(StubResolver::active_user("moviefan42"), payload()).await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "ADMIN_REQUIRED");
    }

    #[actix_web::test]
    async fn test_create_movie_blank_title_is_400() {
        let mut body = payload();
        body["title"] = serde_json::json!("  ");

        let (status, body) = call(StubResolver::admin("moviefan42"), body).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_TITLE");
    }
}
