use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::interface::{TranslateRequest, TranslateResponse};
use crate::config_manager::pipeline::PipelineConfig;
use crate::llm::bridge::LlmBridge;

pub const EMPTY_TEXT_HINT: &str = "Please enter text to translate.";

const JUDGE_INSTRUCTION: &str =
    "Rate the quality of the translation from 1 to 10 and justify the score.";

/// Translate a text, then ask a judge model to grade that translation.
///
/// The two calls run one after the other since the judge prompt embeds
/// the translation.
pub struct TranslationPipeline {
    bridge: Arc<LlmBridge>,
    config: PipelineConfig,
}

impl TranslationPipeline {
    pub fn new(bridge: Arc<LlmBridge>, config: PipelineConfig) -> Self {
        info!(
            "Initialized TranslationPipeline: translate_model={}, judge_model={}",
            config.translate_model, config.judge_model
        );
        Self { bridge, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Blank languages fall back to the configured default
    pub fn resolve_language(&self, language: Option<&str>) -> String {
        language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.config.default_language.as_str())
            .to_string()
    }

    pub async fn run(&self, request: &TranslateRequest) -> TranslateResponse {
        let original = request.text.trim().to_string();
        let language = self.resolve_language(request.language.as_deref());

        if original.is_empty() {
            return TranslateResponse {
                original,
                translation: String::new(),
                evaluation: EMPTY_TEXT_HINT.to_string(),
                language,
            };
        }

        let submission_id = Uuid::new_v4();
        let span = info_span!("submission", id = %submission_id, language = %language);

        async {
            let translation = self
                .bridge
                .invoke_text(
                    &self.config.translate_model,
                    translate_prompt(&language, &original),
                )
                .await;

            let evaluation = self
                .bridge
                .invoke_text(&self.config.judge_model, judge_prompt(&original, &translation))
                .await;

            info!("Submission complete");
            TranslateResponse {
                original,
                translation,
                evaluation,
                language,
            }
        }
        .instrument(span)
        .await
    }
}

pub fn translate_prompt(language: &str, text: &str) -> Vec<String> {
    vec![
        format!("Translate the following text into {}:", language),
        text.to_string(),
    ]
}

pub fn judge_prompt(original: &str, translation: &str) -> Vec<String> {
    vec![
        JUDGE_INSTRUCTION.to_string(),
        "Original:".to_string(),
        original.to_string(),
        "Translation:".to_string(),
        translation.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_prompt_embeds_both_texts() {
        let prompt = judge_prompt("Солнце светит.", "The sun is shining.");
        assert_eq!(prompt[0], JUDGE_INSTRUCTION);
        assert_eq!(prompt[2], "Солнце светит.");
        assert_eq!(prompt[4], "The sun is shining.");
    }

    #[test]
    fn translate_prompt_names_language() {
        let prompt = translate_prompt("German", "Hello");
        assert_eq!(prompt, vec!["Translate the following text into German:", "Hello"]);
    }
}
