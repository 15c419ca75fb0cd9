use serde::{Deserialize, Serialize};

/// A translation submission, as sent by the form or the JSON API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// The three values shown to the user.
/// LLM failures appear as readable text inside `translation` or `evaluation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original: String,
    pub translation: String,
    pub evaluation: String,
    pub language: String,
}
