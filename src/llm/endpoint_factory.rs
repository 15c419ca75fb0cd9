use std::sync::Arc;
use tracing::info;

use crate::config_manager::bridge::{BridgeConfig, ProviderKind};
use crate::llm::endpoint_interface::LlmEndpoint;
use crate::llm::generic_json_endpoint::GenericJsonEndpoint;
use crate::llm::openai_chat_endpoint::OpenAIChatEndpoint;

/// Factory for creating LLM endpoint strategies
pub struct EndpointFactory;

impl EndpointFactory {
    /// Create the endpoint selected by `config.provider`
    pub fn create_endpoint(config: &BridgeConfig) -> Arc<dyn LlmEndpoint> {
        info!("Initializing LLM endpoint: {}", config.provider.as_str());

        let url = config.endpoint().to_string();
        match config.provider {
            ProviderKind::Generic => Arc::new(GenericJsonEndpoint::new(url)),
            ProviderKind::Openai => Arc::new(OpenAIChatEndpoint::new(url, config.max_tokens())),
        }
    }
}
