use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::endpoint_interface::LlmEndpoint;

#[derive(Serialize)]
struct GenericRequest<'a> {
    model_name: &'a str,
    prompt: &'a str,
}

/// Plain JSON endpoint: posts `{"model_name", "prompt"}` and reads
/// `{"response"}` back
pub struct GenericJsonEndpoint {
    url: String,
}

impl GenericJsonEndpoint {
    pub fn new(url: String) -> Self {
        info!("Initialized GenericJsonEndpoint: url={}", url);
        Self { url }
    }
}

impl LlmEndpoint for GenericJsonEndpoint {
    fn name(&self) -> &str {
        "generic"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn build_payload(&self, model_name: &str, prompt: &str) -> Value {
        serde_json::to_value(GenericRequest { model_name, prompt }).unwrap_or(Value::Null)
    }

    fn answer_field(&self) -> &str {
        "response"
    }

    fn extract_answer(&self, body: &Value) -> Option<Value> {
        body.as_object()?.get("response").cloned()
    }
}
