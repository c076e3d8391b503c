use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::service_areas::handlers;
use crate::features::service_areas::services::ServiceAreaService;

/// Create routes for the service-areas feature
///
/// Note: the token-auth middleware is layered on in `main`, so every route
/// here runs with an authenticated provider in request extensions.
pub fn routes(service: Arc<ServiceAreaService>) -> Router {
    Router::new()
        .route(
            "/api/areas/",
            get(handlers::list_areas).post(handlers::create_area),
        )
        .route(
            "/api/areas/{id}",
            get(handlers::get_area)
                .put(handlers::update_area)
                .patch(handlers::patch_area)
                .delete(handlers::delete_area),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;

    use crate::shared::test_helpers::{
        create_area, db_app, register_provider, test_app, token_header,
    };

    #[tokio::test]
    async fn test_list_without_token_is_401() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server.get("/api/areas/").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_detail_without_token_is_401() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server.get("/api/areas/1").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_auth_scheme_is_401() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server
            .get("/api/areas/")
            .add_header(
                HeaderName::from_static("authorization"),
                HeaderValue::from_static("Bearer deadbeef"),
            )
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[ignore = "needs a PostGIS database via DATABASE_URL"]
    async fn test_area_of_one_provider_is_404_for_another() {
        let server = TestServer::new(db_app().await).unwrap();
        let owner = register_provider(&server, "Owner Smith").await;
        let other = register_provider(&server, "Other Smith").await;
        let area_id = create_area(&server, &owner.token, "Owner area").await;

        let (header, value) = token_header(&owner.token);
        let response = server
            .get(&format!("/api/areas/{}", area_id))
            .add_header(header, value)
            .await;
        response.assert_status(StatusCode::OK);

        // a direct-id GET with someone else's token must look like a miss
        let (header, value) = token_header(&other.token);
        let response = server
            .get(&format!("/api/areas/{}", area_id))
            .add_header(header, value)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let (header, value) = token_header(&other.token);
        let response = server.get("/api/areas/").add_header(header, value).await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        let listed = body.as_array().expect("area list");
        assert!(listed.iter().all(|area| area["id"].as_i64() != Some(area_id)));
    }
}
