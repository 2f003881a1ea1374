mod common;

use common::spawn_app;
use env_manager::handlers::HealthStatus;
use reqwest::{Method, header::CONTENT_TYPE};

const HEALTH_BODY: &str = r#"{"status":"ok","service":"env-manager"}"#;

#[test_log::test(tokio::test)]
async fn health_check_works() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/health"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(body, HEALTH_BODY);
}

#[tokio::test]
async fn health_check_accepts_any_method() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = client
            .request(method.clone(), format!("{address}/health"))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK, "{method}");
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.text().await.unwrap(), HEALTH_BODY, "{method}");
    }
}

#[tokio::test]
async fn health_body_is_a_json_object_with_two_fields() {
    let address = spawn_app().await;

    let body: serde_json::Value = reqwest::get(format!("{address}/health"))
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Health body is not valid JSON");

    let object = body.as_object().expect("Health body is not an object");
    assert_eq!(object.len(), 2);
    assert_eq!(object["status"], "ok");
    assert_eq!(object["service"], "env-manager");
}

#[test]
fn health_status_serializes_in_declared_order() {
    let json = serde_json::to_string(&HealthStatus::ok()).unwrap();
    assert_eq!(json, HEALTH_BODY);

    let parsed: HealthStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, HealthStatus::ok());
}
