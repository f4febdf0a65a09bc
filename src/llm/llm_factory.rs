use std::sync::Arc;

use tracing::info;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::gemini_llm::GeminiLLM;
use crate::llm::llm_interface::TextGenerationInterface;
use crate::llm::openai_compatible_llm::OpenAICompatibleLLM;

/// Factory for creating text generation clients
pub struct LLMFactory;

impl LLMFactory {
    /// Create an LLM client for `config.provider`.
    ///
    /// # Arguments
    /// * `config` - LLM section of the application config
    /// * `api_key` - Resolved provider credential
    pub fn create_llm(
        config: &LlmConfig,
        api_key: String,
    ) -> Result<Arc<dyn TextGenerationInterface>, LlmError> {
        info!("Initializing LLM: {}", config.provider);

        match config.provider.as_str() {
            "gemini_llm" => Ok(Arc::new(GeminiLLM::new(
                config.model.clone(),
                config.base_url.clone(),
                api_key,
                config.temperature,
                config.timeout(),
            )?)),
            "openai_compatible_llm" | "openai_llm" => Ok(Arc::new(OpenAICompatibleLLM::new(
                config.model.clone(),
                config.base_url.clone(),
                api_key,
                config.temperature,
                config.timeout(),
            )?)),
            other => Err(LlmError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_providers() {
        let config = LlmConfig::default();
        assert!(LLMFactory::create_llm(&config, "key".to_string()).is_ok());

        let config = LlmConfig {
            provider: "openai_compatible_llm".to_string(),
            base_url: "http://localhost:11434/v1".to_string(),
            ..Default::default()
        };
        assert!(LLMFactory::create_llm(&config, "key".to_string()).is_ok());
    }

    #[test]
    fn test_unknown_provider() {
        let config = LlmConfig {
            provider: "carrier_pigeon".to_string(),
            ..Default::default()
        };
        let err = LLMFactory::create_llm(&config, "key".to_string())
            .err()
            .unwrap();
        assert!(matches!(err, LlmError::UnsupportedProvider(ref p) if p == "carrier_pigeon"));
    }
}
