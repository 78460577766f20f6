use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use rekesh_shared::test_utils::http_test_utils::{create_test_request, response_to_json};

use super::utils::{seeded_store, test_app};
use crate::routes;

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(create_test_request("GET", "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_to_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(create_test_request("GET", "/totally/unknown", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_to_json(response).await;
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["message"], "The requested resource was not found");
}

#[tokio::test]
async fn test_routes_nest_under_prefix() {
    let app = routes::create_router_with_store(Arc::new(seeded_store()), "/api");

    // Prefixed path resolves
    let response = app
        .clone()
        .oneshot(create_test_request("GET", "/api/requests", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Unprefixed path falls through to the 404 handler
    let response = app
        .clone()
        .oneshot(create_test_request("GET", "/requests", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_to_json(response).await;
    assert_eq!(body["message"], "The requested resource was not found");
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(create_test_request("DELETE", "/requests/1", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
