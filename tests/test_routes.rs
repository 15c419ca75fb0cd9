use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::MockServer;

use translation_judge::config_manager::AppConfig;
use translation_judge::routes::build_app;
use translation_judge::state::AppState;

mod common;

use crate::common::{
    expect_no_calls, generic_config, mount_generic_answer, received_bodies, JUDGE_MODEL,
    TRANSLATE_MODEL,
};

fn app(server: &MockServer) -> Router {
    let config = AppConfig {
        bridge: generic_config(server),
        ..AppConfig::default()
    };
    build_app(AppState::new(config).unwrap())
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_renders_empty_form() {
    let server = MockServer::start().await;
    expect_no_calls(&server).await;

    let response = app(&server)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<option value="English" selected>English</option>"#));
    assert!(html.contains(r#"<option value="French">French</option>"#));
    assert!(html.contains(r#"<option value="German">German</option>"#));
    assert!(html.contains(r#"<pre id="translation"></pre>"#));
}

#[tokio::test]
async fn form_submission_renders_all_three_values() {
    let server = MockServer::start().await;
    mount_generic_answer(&server, TRANSLATE_MODEL, "Le soleil brille.").await;
    mount_generic_answer(&server, JUDGE_MODEL, "Score 9, natural phrasing").await;

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("text=The+sun+is+shining.&language=French"))
        .unwrap();
    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("The sun is shining."));
    assert!(html.contains("Le soleil brille."));
    assert!(html.contains("Score 9, natural phrasing"));
    assert!(html.contains(r#"<option value="French" selected>French</option>"#));
}

#[tokio::test]
async fn form_without_text_shows_hint() {
    let server = MockServer::start().await;
    expect_no_calls(&server).await;

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("text=&language=German"))
        .unwrap();
    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Please enter text to translate."));
}

#[tokio::test]
async fn api_translate_returns_json() {
    let server = MockServer::start().await;
    mount_generic_answer(&server, TRANSLATE_MODEL, "Hallo Welt").await;
    mount_generic_answer(&server, JUDGE_MODEL, "7/10").await;

    let response = app(&server)
        .oneshot(post_json("/api/translate", json!({"text": "Hello world", "language": "German"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        body,
        json!({
            "original": "Hello world",
            "translation": "Hallo Welt",
            "evaluation": "7/10",
            "language": "German"
        })
    );
}

#[tokio::test]
async fn api_invoke_rejects_non_text_messages() {
    let server = MockServer::start().await;
    expect_no_calls(&server).await;

    let response = app(&server)
        .oneshot(post_json("/api/invoke", json!({"model_name": "m", "messages": 12345})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["ok"], false);
    assert_eq!(body["kind"], "input");
    assert!(body["result"].as_str().unwrap().contains("invalid parameter type"));
}

#[tokio::test]
async fn api_invoke_forwards_sequences() {
    let server = MockServer::start().await;
    mount_generic_answer(&server, "m", "pong").await;

    let response = app(&server)
        .oneshot(post_json(
            "/api/invoke",
            json!({"model_name": "m", "messages": [" ping ", null, "again"]}),
        ))
        .await
        .unwrap();

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({"ok": true, "result": "pong"}));
    assert_eq!(received_bodies(&server).await[0]["prompt"], "ping\nagain");
}

#[tokio::test]
async fn health_reports_provider() {
    let server = MockServer::start().await;

    let response = app(&server)
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider"], "generic");
    assert_eq!(body["judge_model"], JUDGE_MODEL);
}
