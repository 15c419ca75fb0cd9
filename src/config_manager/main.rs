use anyhow::{Context, Result};
use config::{File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::config_manager::bridge::BridgeConfig;
use crate::config_manager::pipeline::PipelineConfig;
use crate::config_manager::server::ServerConfig;

/// Config file read when `CONFIG_PATH` is not set
pub const DEFAULT_CONFIG_PATH: &str = "conf.yaml";

/// Environment variables that override a key of the file configuration.
/// Later entries win over earlier ones for the same key.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("HOST", "server.host"),
    ("PORT", "server.port"),
    ("LLM_PROVIDER", "bridge.provider"),
    ("MENTORPIECE_API_ENDPOINT", "bridge.endpoint"),
    ("LLM_API_ENDPOINT", "bridge.endpoint"),
    ("LLM_TIMEOUT_SECS", "bridge.timeout_secs"),
    ("TRANSLATE_MODEL", "pipeline.translate_model"),
    ("JUDGE_MODEL", "pipeline.judge_model"),
];

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub bridge: BridgeConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    /// Load configuration from the process environment and the optional
    /// YAML file named by `CONFIG_PATH` (default `conf.yaml`).
    pub fn load() -> Result<Self> {
        let explicit = std::env::var("CONFIG_PATH").ok();
        let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        Self::load_from(path, explicit.is_some(), |name| std::env::var(name).ok())
    }

    /// Layer defaults, the YAML file at `path` and the variables returned by
    /// `lookup`. The API key is read from the variable named by
    /// `bridge.api_key_env` unless the file sets one.
    pub fn load_from<F>(path: &str, required: bool, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if required && !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let mut builder = config::Config::builder()
            .add_source(File::new(path, FileFormat::Yaml).required(false));

        for (var, key) in ENV_OVERRIDES {
            let value = lookup(*var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            if let Some(value) = value {
                debug!("Overriding {} from {}", key, var);
                let value = if *key == "bridge.provider" {
                    value.to_ascii_lowercase()
                } else {
                    value
                };
                builder = builder.set_override(*key, value)?;
            }
        }

        let mut app_config: AppConfig = builder
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?
            .try_deserialize()
            .context("Invalid configuration")?;

        if app_config.bridge.api_key.is_none() {
            app_config.bridge.api_key = lookup(app_config.bridge.api_key_env());
        }

        Ok(app_config)
    }
}
