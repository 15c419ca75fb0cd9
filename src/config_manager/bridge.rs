use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::llm::prompt::DEFAULT_MAX_PROMPT_CHARS;

/// Which wire protocol the bridge speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// `{"model_name", "prompt"}` in, `{"response"}` out
    #[default]
    #[serde(alias = "mentorpiece")]
    Generic,
    /// OpenAI chat completions
    #[serde(alias = "openai_llm")]
    Openai,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Generic => "generic",
            ProviderKind::Openai => "openai",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::Generic => "https://api.mentorpiece.org/v1/process-ai-request",
            ProviderKind::Openai => "https://api.openai.com/v1/chat/completions",
        }
    }

    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Generic => "MENTORPIECE_API_KEY",
            ProviderKind::Openai => "OPENAI_API_KEY",
        }
    }

    pub fn default_timeout_secs(&self) -> u64 {
        match self {
            ProviderKind::Generic => 15,
            ProviderKind::Openai => 20,
        }
    }

    pub fn requires_api_key(&self) -> bool {
        matches!(self, ProviderKind::Openai)
    }
}

/// Configuration for the LLM bridge.
///
/// Unset fields fall back to the defaults of the selected provider, so a
/// config that only names `provider: openai` gets the OpenAI endpoint,
/// a 20 second timeout and a mandatory `OPENAI_API_KEY`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub provider: ProviderKind,

    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Name of the variable the key comes from, used in diagnostics
    #[serde(default)]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub require_api_key: Option<bool>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub max_prompt_chars: Option<usize>,

    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl BridgeConfig {
    pub fn for_provider(provider: ProviderKind) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_endpoint())
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_api_key_env())
    }

    /// The configured key without surrounding whitespace or a `Bearer ` prefix
    pub fn api_key(&self) -> Option<String> {
        let key = self.api_key.as_deref()?.trim();
        let key = match key.get(..7) {
            Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => key[7..].trim(),
            _ => key,
        };
        (!key.is_empty()).then(|| key.to_string())
    }

    pub fn require_api_key(&self) -> bool {
        self.require_api_key
            .unwrap_or_else(|| self.provider.requires_api_key())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .unwrap_or_else(|| self.provider.default_timeout_secs())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }

    pub fn max_prompt_chars(&self) -> usize {
        self.max_prompt_chars.unwrap_or(DEFAULT_MAX_PROMPT_CHARS)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(1024)
    }
}
