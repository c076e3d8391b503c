use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::coverage::handlers;
use crate::features::coverage::services::CoverageService;

/// Create routes for the coverage feature
///
/// Note: this feature is public (no authentication required)
pub fn routes(service: Arc<CoverageService>) -> Router {
    Router::new()
        .route("/api/get_areas/", get(handlers::get_areas))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::shared::test_helpers::{create_area, db_app, register_provider, test_app};

    #[tokio::test]
    async fn test_missing_params_is_400() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server.get("/api/get_areas/").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_lng_is_400() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server.get("/api/get_areas/?lat=0.5").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_lat_is_400() {
        let server = TestServer::new(test_app()).unwrap();
        let response = server.get("/api/get_areas/?lat=abc&lng=100.5").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[ignore = "needs a PostGIS database via DATABASE_URL"]
    async fn test_point_inside_polygon_matches_outside_does_not() {
        let server = TestServer::new(db_app().await).unwrap();
        let provider = register_provider(&server, "Coverage Smith").await;
        let area_name = format!("square-{}", uuid::Uuid::new_v4());
        create_area(&server, &provider.token, &area_name).await;

        // (lat 0.5, lng 100.5) lies inside the 1x1 square
        let response = server.get("/api/get_areas/?lat=0.5&lng=100.5").await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        let hit = body
            .as_array()
            .expect("coverage list")
            .iter()
            .find(|area| area["name"] == area_name.as_str())
            .cloned()
            .expect("inside point covered by the square");
        assert_eq!(hit["price"], "40.25");
        assert_eq!(hit["provider"], "Coverage Smith");

        // one degree north of the square
        let response = server.get("/api/get_areas/?lat=1.5&lng=100.5").await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body
            .as_array()
            .expect("coverage list")
            .iter()
            .all(|area| area["name"] != area_name.as_str()));
    }
}
