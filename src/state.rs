use std::sync::Arc;

use crate::config_manager::AppConfig;
use crate::llm::bridge::LlmBridge;
use crate::translate::pipeline::TranslationPipeline;
use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub bridge: Arc<LlmBridge>,
    pub pipeline: Arc<TranslationPipeline>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let bridge = Arc::new(LlmBridge::new(config.bridge.clone())?);
        let pipeline = Arc::new(TranslationPipeline::new(
            bridge.clone(),
            config.pipeline.clone(),
        ));

        Ok(Self {
            config,
            bridge,
            pipeline,
            views: Arc::new(Views::new()?),
        })
    }
}
