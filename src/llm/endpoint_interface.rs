use serde_json::Value;

/// Wire protocol of one LLM endpoint.
///
/// Implementations only describe the payload shape and where the answer
/// lives in the reply. Validation, timeouts, status handling and error
/// mapping are shared by `LlmBridge`.
pub trait LlmEndpoint: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// URL the request is posted to
    fn url(&self) -> &str;

    /// JSON body for `model_name` and the assembled `prompt`
    fn build_payload(&self, model_name: &str, prompt: &str) -> Value;

    /// Location of the answer, as shown in diagnostics
    fn answer_field(&self) -> &str;

    /// Pull the answer out of a parsed reply, `None` when absent
    fn extract_answer(&self, body: &Value) -> Option<Value>;
}
