use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::providers::handlers;
use crate::features::providers::services::ProviderService;

/// Create routes for the provider directory
///
/// Note: this feature is public (no authentication required)
pub fn routes(service: Arc<ProviderService>) -> Router {
    Router::new()
        .route(
            "/api/providers/",
            get(handlers::list_providers).post(handlers::create_provider),
        )
        .route("/api/providers/get_token", post(handlers::get_token))
        .route(
            "/api/providers/{id}",
            get(handlers::get_provider)
                .put(handlers::update_provider)
                .patch(handlers::patch_provider)
                .delete(handlers::delete_provider),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::shared::test_helpers::{db_app, register_provider, test_app};

    #[tokio::test]
    async fn test_create_with_bad_currency_is_400() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server
            .post("/api/providers/")
            .json(&json!({
                "name": "Test Smith",
                "email": "test@test.com",
                "language": "en",
                "currency": "EURO",
                "phone_number": "+919739630033"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_lettered_phone_is_400() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server
            .post("/api/providers/")
            .json(&json!({
                "name": "Test Smith",
                "email": "test@test.com",
                "language": "en",
                "currency": "TST",
                "phone_number": "CALL-ME-NOW"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[ignore = "needs a PostGIS database via DATABASE_URL"]
    async fn test_token_minted_once_and_stable_across_reads() {
        let server = TestServer::new(db_app().await).unwrap();
        let provider = register_provider(&server, "Test Smith").await;
        assert_eq!(provider.token.len(), 40);

        let response = server.get(&format!("/api/providers/{}", provider.id)).await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["auth_token"], provider.token.as_str());

        // updates neither expose nor rotate the token
        let response = server
            .patch(&format!("/api/providers/{}", provider.id))
            .json(&json!({"language": "fr"}))
            .await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body.get("auth_token").is_none());

        let response = server.get(&format!("/api/providers/{}", provider.id)).await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["auth_token"], provider.token.as_str());
        assert_eq!(body["language"], "fr");
    }

    #[tokio::test]
    #[ignore = "needs a PostGIS database via DATABASE_URL"]
    async fn test_get_token_returns_existing_token_for_known_email() {
        let server = TestServer::new(db_app().await).unwrap();
        let provider = register_provider(&server, "Test Smith").await;

        let response = server
            .post("/api/providers/get_token")
            .json(&json!({"email": provider.email}))
            .await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["token"], provider.token.as_str());

        let response = server
            .post("/api/providers/get_token")
            .json(&json!({"email": "nobody@test.com"}))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_token_without_email_is_400() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server
            .post("/api/providers/get_token")
            .json(&json!({}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
