//! Oracle provider abstraction
//!
//! Defines the OracleProvider enum, OracleError types, and factory for
//! creating provider instances from configuration.

use thiserror::Error;

use crate::config::OracleConfig;

mod anthropic;

pub use anthropic::AnthropicClient;

/// Errors that can occur during oracle operations
#[derive(Debug, Error)]
pub enum OracleError {
    /// Oracle is not configured (missing API key or disabled)
    #[error("oracle not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the API response
    #[error("parse error: {0}")]
    Parse(String),
}

/// Oracle provider implementations
#[derive(Debug)]
pub enum OracleProvider {
    /// Anthropic Claude API
    Anthropic(AnthropicClient),
}

impl OracleProvider {
    /// Create an oracle provider from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &OracleConfig) -> Result<Self, OracleError> {
        if !config.enabled {
            return Err(OracleError::NotConfigured(
                "oracle is disabled in config".to_string(),
            ));
        }

        let api_key = config
            .api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                OracleError::NotConfigured(
                    "missing API key; set [oracle] api_key in config or ANTHROPIC_API_KEY"
                        .to_string(),
                )
            })?;

        if config.model.trim().is_empty() {
            return Err(OracleError::NotConfigured(
                "empty model in [oracle] config".to_string(),
            ));
        }

        Ok(OracleProvider::Anthropic(AnthropicClient::new(
            api_key.clone(),
            config.model.clone(),
            config.max_tokens,
            config.temperature,
        )))
    }

    /// Request a completion from the provider
    ///
    /// Blocks until the full response body has arrived; there is exactly one
    /// in-flight interaction at a time, so no retries or cancellation.
    pub fn complete(&self, system: &str, prompt: &str) -> Result<String, OracleError> {
        match self {
            OracleProvider::Anthropic(client) => client.complete(system, prompt),
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
