mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use inquiry_gateway::api::handlers::{categories_handler, locations_handler};

fn test_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/catalog/locations", get(locations_handler))
        .route("/api/catalog/categories", get(categories_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_locations_listing() {
    let server = test_server();

    let response = server.get("/api/catalog/locations").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let locations = body["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 20);
    assert!(locations.iter().any(|l| l == "Pune"));
}

#[tokio::test]
async fn test_categories_listing() {
    let server = test_server();

    let response = server.get("/api/catalog/categories").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 5);

    let pg = categories.iter().find(|c| c["id"] == "pg").unwrap();
    assert_eq!(pg["title"], "PG & Hostels");
    assert!(pg["icon"].is_string());
}
