use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::add_entry::map_watchlist_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove a movie from the caller's watchlist
///
/// Responds with the removed entry.
#[utoipa::path(
    delete,
    path = "/api/v1/watchlist/{user_id}/{movie_id}",
    tag = "watchlist",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = Uuid, Path, description = "User id, must be the caller"),
        ("movie_id" = Uuid, Path, description = "Movie id"),
    ),
    responses(
        (status = 200, description = "Removed entry"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Declared user_id is not the caller", body = ErrorResponse),
        (status = 404, description = "Movie not in watchlist", body = ErrorResponse),
    )
)]
#[delete("/api/v1/watchlist/{user_id}/{movie_id}")]
pub async fn remove_watchlist_entry_handler(
    auth: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user = match resolve_current_user_or_response(&data, &auth.username).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let (user_id, movie_id) = path.into_inner();
    match data
        .watchlist_use_cases
        .remove(&user.actor(), user_id, movie_id)
        .await
    {
        Ok(entry) => {
            info!(entry_id = %entry.id, movie_id = %entry.movie_id, "Watchlist entry removed");
            ApiResponse::success(entry)
        }
        Err(e) => map_watchlist_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        fixed_user_id, token_provider_data, MockWatchlistUseCases, StubResolver,
    };
    use actix_web::{test, App};
    use std::sync::Arc;

    async fn call(mock: MockWatchlistUseCases, user_id: Uuid, movie_id: Uuid) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_watchlist_use_cases(Arc::new(mock))
            .with_current_user_resolver(Arc::new(StubResolver::active_user("moviefan42")))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data("moviefan42"))
                .service(remove_watchlist_entry_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/watchlist/{user_id}/{movie_id}"))
            .insert_header(("Authorization", "Bearer any-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_remove_entry_returns_record() {
        let mock = MockWatchlistUseCases::default();
        let movie_id = mock.movie_id();
        let entry_id = mock.entry_id();

        let (status, body) = call(mock, fixed_user_id(), movie_id).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["id"], entry_id.to_string());
    }

    #[actix_web::test]
    async fn test_remove_absent_entry_is_404() {
        let (status, body) = call(
            MockWatchlistUseCases::empty(),
            fixed_user_id(),
            Uuid::new_v4(),
        )
        .await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "WATCHLIST_ENTRY_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_remove_from_foreign_watchlist_is_403() {
        let (status, body) = call(
            MockWatchlistUseCases::default(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "NOT_RESOURCE_OWNER");
    }
}
