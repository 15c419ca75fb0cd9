use serde::{Deserialize, Serialize};

/// Models and languages used by the translate-then-judge flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_translate_model")]
    pub translate_model: String,

    #[serde(default = "default_judge_model")]
    pub judge_model: String,

    #[serde(default = "default_language")]
    pub default_language: String,

    /// Choices offered by the form selector
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

fn default_translate_model() -> String {
    "Qwen/Qwen3-VL-30B-A3B-Instruct".to_string()
}

fn default_judge_model() -> String {
    "claude-sonnet-4-5-20250929".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["English".to_string(), "French".to_string(), "German".to_string()]
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            translate_model: default_translate_model(),
            judge_model: default_judge_model(),
            default_language: default_language(),
            languages: default_languages(),
        }
    }
}
