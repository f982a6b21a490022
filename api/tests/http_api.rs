use std::sync::Arc;

use axum_test::TestServer;
use forkcast_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, ServerArgs, WeatherArgs},
};
use serde_json::json;

fn test_args() -> Arc<Args> {
    Arc::new(Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: "/api".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        weather: WeatherArgs {
            openweathermap_api_key: "test-key".to_string(),
        },
        llm: LlmArgs {
            openai_api_key: "test-key".to_string(),
            model_name: "gpt-4-turbo-preview".to_string(),
        },
    })
}

fn test_server() -> TestServer {
    let state = state(test_args());
    let router = router(state).expect("router builds");
    TestServer::new(router).expect("test server starts")
}

#[tokio::test]
async fn health_returns_ok() {
    let server = test_server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok"}));
}

#[tokio::test]
async fn recommendations_rejects_empty_mood() {
    let server = test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({
            "latitude": 40.7128,
            "longitude": -74.0060,
            "mood": ""
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn recommendations_rejects_missing_coordinates() {
    let server = test_server();

    let response = server
        .post("/api/recommendations")
        .json(&json!({"mood": "happy"}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = test_server();

    let response = server.get("/api/nope").await;

    response.assert_status_not_found();
}
