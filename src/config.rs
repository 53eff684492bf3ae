//! Runtime configuration
//!
//! Settings are layered: serde defaults, then an optional `sentira.toml`,
//! then `SENTIRA_*` environment variables, then CLI flags.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::token::DEFAULT_USD_PER_TOKEN;

/// Top-level application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub batch: BatchSettings,
}

/// LLM provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmSettings {
    /// Model identifier used for both classification calls and local
    /// token counting
    #[serde(default = "default_model")]
    pub model: String,
    /// Chat-completions endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Cost estimation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingSettings {
    /// USD billed per token. Provider pricing changes; override here when
    /// it does.
    #[serde(default = "default_usd_per_token")]
    pub usd_per_token: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            usd_per_token: default_usd_per_token(),
        }
    }
}

/// Batch execution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchSettings {
    /// Maximum simultaneous in-flight API calls. 1 means strictly
    /// sequential processing.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_usd_per_token() -> f64 {
    DEFAULT_USD_PER_TOKEN
}

fn default_concurrency() -> usize {
    1
}

impl Settings {
    /// Load settings from an optional config file plus `SENTIRA_*`
    /// environment overrides (e.g. `SENTIRA_LLM__MODEL`).
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("SENTIRA").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Apply CLI overrides on top of file/env configuration
    pub fn merge_cli(&mut self, cli: &Cli) {
        if let Some(model) = &cli.model {
            self.llm.model = model.clone();
        }
        if let Some(concurrency) = cli.concurrency {
            self.batch.concurrency = concurrency.max(1);
        }
    }
}
