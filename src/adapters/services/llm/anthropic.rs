//! Anthropic generation backend adapter
//!
//! Implements the GenerationPort for Anthropic's Messages API (Claude models).

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, GenerationPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Per-call timeout. A timed-out call is reported like any other backend
/// failure and never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Anthropic backend implementation
pub struct AnthropicBackend {
    client: Client,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: String,
}

impl AnthropicBackend {
    /// Create a new Anthropic backend with the given API key
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::backend(None, format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl GenerationPort for AnthropicBackend {
    async fn generate(&self, config: &GenerationConfig, instruction: &str) -> Result<String> {
        let request_body = MessagesRequest {
            model: config.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: instruction.to_string(),
            }],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        log::info!("Calling Anthropic messages API with model: {}", config.model);

        let response = self
            .client
            .post(format!("{}/messages", ANTHROPIC_API_BASE))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                AppError::backend(
                    e.status().map(|s| s.as_u16()),
                    format!("Messages request failed: {}", e),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::backend(
                Some(status.as_u16()),
                format!("Messages request failed: {}", error_text),
            ));
        }

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            AppError::backend(None, format!("Failed to parse messages response: {}", e))
        })?;

        // Only the first text block is taken; nothing else is parsed.
        let content = messages_response
            .content
            .iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text.clone())
            .ok_or_else(|| AppError::backend(None, "No content blocks returned".to_string()))?;

        log::info!(
            "Anthropic completion successful, generated {} characters",
            content.len()
        );

        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
