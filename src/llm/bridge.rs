use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config_manager::bridge::BridgeConfig;
use crate::llm::endpoint_factory::EndpointFactory;
use crate::llm::endpoint_interface::LlmEndpoint;
use crate::llm::error::{display_result, BridgeError};
use crate::llm::prompt::Messages;

/// Characters of prompt and answer included in log lines
const LOG_PREVIEW_CHARS: usize = 200;

const UNREADABLE_BODY: &str = "<failed to read response body>";

/// Sends one prompt to the configured LLM endpoint and maps every outcome
/// to either the answer text or a `BridgeError`.
///
/// Holds no per-call state, so a single instance is shared across requests.
pub struct LlmBridge {
    client: Client,
    endpoint: Arc<dyn LlmEndpoint>,
    config: BridgeConfig,
}

impl LlmBridge {
    pub fn new(config: BridgeConfig) -> anyhow::Result<Self> {
        let endpoint = EndpointFactory::create_endpoint(&config);
        Self::with_endpoint(config, endpoint)
    }

    /// Build a bridge around an explicit endpoint strategy
    pub fn with_endpoint(
        config: BridgeConfig,
        endpoint: Arc<dyn LlmEndpoint>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let credential = match config.api_key() {
            Some(_) => "set",
            None => "unset",
        };

        info!(
            "Initialized LlmBridge: provider={}, url={}, timeout={}s, credential={}",
            endpoint.name(),
            endpoint.url(),
            config.timeout_secs(),
            credential
        );

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn provider(&self) -> &str {
        self.endpoint.name()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Send `messages` to `model_name` and return the extracted answer.
    ///
    /// Input problems are reported before anything touches the network.
    pub async fn invoke(
        &self,
        model_name: &str,
        messages: impl Into<Messages>,
    ) -> Result<String, BridgeError> {
        let messages: Messages = messages.into();
        let result = match messages.into_prompt(self.config.max_prompt_chars()) {
            Ok(prompt) => self.dispatch(model_name, &prompt).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            warn!(
                provider = %self.endpoint.name(),
                model = %model_name,
                kind = ?err.kind(),
                "LLM call failed: {}",
                err
            );
        }
        result
    }

    /// Like `invoke`, for messages of unknown shape (e.g. a JSON request body)
    pub async fn invoke_value(
        &self,
        model_name: &str,
        messages: &Value,
    ) -> Result<String, BridgeError> {
        match Messages::try_from(messages) {
            Ok(messages) => self.invoke(model_name, messages).await,
            Err(err) => {
                warn!(model = %model_name, "Rejected messages: {}", err);
                Err(err)
            }
        }
    }

    /// Like `invoke`, with failures rendered as their display text
    pub async fn invoke_text(&self, model_name: &str, messages: impl Into<Messages>) -> String {
        display_result(self.invoke(model_name, messages).await)
    }

    async fn dispatch(&self, model_name: &str, prompt: &str) -> Result<String, BridgeError> {
        let api_key = self.config.api_key();
        if api_key.is_none() && self.config.require_api_key() {
            return Err(BridgeError::MissingCredential {
                variable: self.config.api_key_env().to_string(),
            });
        }

        let payload = self.endpoint.build_payload(model_name, prompt);
        let prompt_preview: String = prompt.chars().take(LOG_PREVIEW_CHARS).collect();
        info!(
            provider = %self.endpoint.name(),
            model = %model_name,
            prompt_len = prompt.chars().count(),
            prompt_preview = %prompt_preview,
            "LLM request"
        );
        debug!("LLM payload: {}", payload);

        let mut request = self
            .client
            .post(self.endpoint.url())
            .header(CONTENT_TYPE, "application/json")
            .json(&payload);
        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }

        let timeout_secs = self.config.timeout_secs();
        let response = request
            .send()
            .await
            .map_err(|e| BridgeError::from_transport(e, timeout_secs))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(BridgeError::Unauthorized {
                variable: self.config.api_key_env().to_string(),
            });
        }
        if status.as_u16() >= 400 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            return Err(BridgeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| BridgeError::from_transport(e, timeout_secs))?;
        let body: Value = serde_json::from_str(&text).map_err(|_| BridgeError::InvalidJson)?;

        let answer = match self.endpoint.extract_answer(&body) {
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
            None => {
                return Err(BridgeError::MissingField {
                    field: self.endpoint.answer_field().to_string(),
                    payload: body.to_string(),
                })
            }
        };

        let answer_preview: String = answer.chars().take(LOG_PREVIEW_CHARS).collect();
        info!(
            provider = %self.endpoint.name(),
            model = %model_name,
            response_len = answer.chars().count(),
            response_preview = %answer_preview,
            "LLM response"
        );
        Ok(answer)
    }
}
