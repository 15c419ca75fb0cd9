#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use translation_judge::config_manager::{BridgeConfig, ProviderKind};

pub const GENERIC_PATH: &str = "/v1/process-ai-request";
pub const OPENAI_PATH: &str = "/v1/chat/completions";

pub const TRANSLATE_MODEL: &str = "Qwen/Qwen3-VL-30B-A3B-Instruct";
pub const JUDGE_MODEL: &str = "claude-sonnet-4-5-20250929";

pub fn generic_config(server: &MockServer) -> BridgeConfig {
    BridgeConfig {
        endpoint: Some(format!("{}{}", server.uri(), GENERIC_PATH)),
        ..BridgeConfig::for_provider(ProviderKind::Generic)
    }
}

pub fn openai_config(server: &MockServer, api_key: Option<&str>) -> BridgeConfig {
    BridgeConfig {
        endpoint: Some(format!("{}{}", server.uri(), OPENAI_PATH)),
        api_key: api_key.map(str::to_string),
        ..BridgeConfig::for_provider(ProviderKind::Openai)
    }
}

/// Answer `{"response": answer}` for requests naming `model`
pub async fn mount_generic_answer(server: &MockServer, model: &str, answer: &str) {
    Mock::given(method("POST"))
        .and(path(GENERIC_PATH))
        .and(body_partial_json(json!({ "model_name": model })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": answer })))
        .mount(server)
        .await;
}

pub async fn mount_generic_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(GENERIC_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Fails the test on drop if anything reached the server
pub async fn expect_no_calls(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "unexpected" })))
        .expect(0)
        .mount(server)
        .await;
}

/// JSON bodies of every request the server received, in order
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
