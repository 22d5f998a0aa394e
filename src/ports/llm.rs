/// Generation backend port trait
///
/// Defines the interface to the external text-generation service.
/// Implementations: Anthropic (production), MockBackend (tests).
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Model used for every synthesis call.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Ceiling on generated output per audience.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Low temperature favoring deterministic narrative output.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Configuration for generation requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model identifier, e.g. "claude-3-5-sonnet-20241022"
    pub model: String,

    /// Maximum tokens in the response
    pub max_tokens: u32,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: Option<f32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }
}

/// Port trait for the text-generation backend.
///
/// The returned text is opaque: callers take the first text block the service
/// produced and never parse further.
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Runs one generation instruction to completion.
    async fn generate(&self, config: &GenerationConfig, instruction: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
