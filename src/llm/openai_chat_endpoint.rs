use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::endpoint_interface::LlmEndpoint;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

/// OpenAI chat completions endpoint.
/// The whole prompt goes out as a single user message.
pub struct OpenAIChatEndpoint {
    url: String,
    max_tokens: u32,
}

impl OpenAIChatEndpoint {
    pub fn new(url: String, max_tokens: u32) -> Self {
        info!(
            "Initialized OpenAIChatEndpoint: url={}, max_tokens={}",
            url, max_tokens
        );
        Self { url, max_tokens }
    }
}

impl LlmEndpoint for OpenAIChatEndpoint {
    fn name(&self) -> &str {
        "openai"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn build_payload(&self, model_name: &str, prompt: &str) -> Value {
        let request = ChatCompletionRequest {
            model: model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };
        serde_json::to_value(request).unwrap_or(Value::Null)
    }

    fn answer_field(&self) -> &str {
        "choices[0].message.content"
    }

    fn extract_answer(&self, body: &Value) -> Option<Value> {
        body.pointer("/choices/0/message/content").cloned()
    }
}
