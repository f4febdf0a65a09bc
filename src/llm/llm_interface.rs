use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// A model advertised by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub supported_generation_methods: Vec<String>,
}

/// Interface for a stateless text generation service.
/// Every call is independent; no history or system prompt is kept.
#[async_trait]
pub trait TextGenerationInterface: Send + Sync {
    /// Generate a single completion for `prompt`
    ///
    /// Returns [`LlmError::EmptyResponse`] when the provider answers
    /// without any text.
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError>;

    /// List the models available to the configured credential
    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError>;
}
