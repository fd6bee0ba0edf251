mod common;

use axum::http::StatusCode;
use common::{server_with_store_outage, server_without_llm};
use serde_json::Value;

#[tokio::test]
async fn test_lists_the_catalog() {
    let server = server_without_llm().await;

    let body: Value = server.get("/api/foods").await.json();
    let foods = body["data"].as_array().unwrap();

    assert_eq!(foods.len(), 6);
    assert_eq!(foods[0]["food_type"], "energy-drink");
}

#[tokio::test]
async fn test_get_food_by_id() {
    let server = server_without_llm().await;

    let body: Value = server.get("/api/foods/4").await.json();
    assert_eq!(body["data"]["name"], "Kombucha");

    server
        .get("/api/foods/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_components() {
    let server = server_without_llm().await;

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"]["backend"], "memory");
    assert_eq!(body["store"]["status"], "up");
    assert_eq!(body["llm"], "disabled");
}

#[tokio::test]
async fn test_health_is_degraded_during_store_outage() {
    let server = server_with_store_outage("production").await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"]["status"], "down");
}

#[tokio::test]
async fn test_serves_openapi_document() {
    let server = server_without_llm().await;

    let body: Value = server.get("/api-docs/openapi.json").await.json();
    assert!(body["paths"]["/api/generate-dialogue"]["post"].is_object());
    assert!(body["paths"]["/api/leaderboard"]["get"].is_object());
}
