// Configuration type definitions

use serde::Deserialize;

use crate::suggest::DEFAULT_LIMIT;

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_max_tokens() -> u32 {
    700
}

fn default_temperature() -> f32 {
    0.2
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Oracle (language model) configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Falls back to ANTHROPIC_API_KEY in the environment when unset
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            enabled: default_enabled(),
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Suggestion configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// Maximum suggestions shown under the search bar
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            limit: default_limit(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub oracle: OracleConfig,

    #[serde(default)]
    pub suggest: SuggestConfig,
}
