//! Anthropic Claude API client
//!
//! One blocking request per call against the Messages API; the text blocks
//! of the response body are concatenated and returned.

use super::OracleError;

/// Anthropic API endpoint
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version header
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Claude API client
#[derive(Debug)]
pub struct AnthropicClient {
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    /// Request a completion from the Anthropic API
    pub fn complete(&self, system: &str, prompt: &str) -> Result<String, OracleError> {
        let request_body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": system,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let body =
            serde_json::to_string(&request_body).map_err(|e| OracleError::Parse(e.to_string()))?;

        log::debug!("oracle request: model={} bytes={}", self.model, body.len());

        let response = ureq::post(ANTHROPIC_API_URL)
            .set("x-api-key", &self.api_key)
            .set("anthropic-version", ANTHROPIC_VERSION)
            .set("content-type", "application/json")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => {
                    let message = response
                        .into_string()
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    OracleError::Api { code, message }
                }
                ureq::Error::Transport(t) => OracleError::Network(t.to_string()),
            })?;

        let raw = response
            .into_string()
            .map_err(|e| OracleError::Network(e.to_string()))?;

        extract_text(&raw)
    }
}

/// Concatenate the text blocks of a Messages API response body
fn extract_text(body: &str) -> Result<String, OracleError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| OracleError::Parse(e.to_string()))?;

    let content = json
        .get("content")
        .and_then(|c| c.as_array())
        .ok_or_else(|| OracleError::Parse("missing content array in response".to_string()))?;

    let mut out = String::new();
    for block in content {
        if block.get("type").and_then(|t| t.as_str()) == Some("text")
            && let Some(text) = block.get("text").and_then(|t| t.as_str())
        {
            out.push_str(text);
        }
    }

    if out.is_empty() {
        return Err(OracleError::Parse(
            "no text content in response".to_string(),
        ));
    }

    Ok(out)
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod anthropic_tests;
