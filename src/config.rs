use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config_manager::utils::read_config_text;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LlmConfig,
    #[serde(default)]
    pub translation_config: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// `gemini_llm` or `openai_compatible_llm`
    #[serde(default = "default_llm_provider")]
    pub provider: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Takes precedence over `api_key_env` once any `${VAR}` in it resolves
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Pause before each generation call; 0 disables it
    #[serde(default = "default_throttle_delay_ms")]
    pub throttle_delay_ms: u64,
    #[serde(default = "default_llm_timeout")]
    pub timeout_seconds: u64,
}

fn default_llm_provider() -> String {
    "gemini_llm".to_string()
}

fn default_llm_model() -> String {
    "gemini-1.5-pro-latest".to_string()
}

fn default_llm_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GOOGLE_API_KEY".to_string()
}

fn default_throttle_delay_ms() -> u64 {
    1000
}

fn default_llm_timeout() -> u64 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_translation_base_url")]
    pub base_url: String,
    /// Longest text sent in one call, in chars
    #[serde(default = "default_chunk_limit")]
    pub chunk_limit: usize,
    #[serde(default = "default_translation_timeout")]
    pub timeout_seconds: u64,
}

fn default_translation_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_chunk_limit() -> usize {
    crate::translate::TRANSLATION_LIMIT
}

fn default_translation_timeout() -> u64 {
    30
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            model: default_llm_model(),
            base_url: default_llm_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            temperature: None,
            throttle_delay_ms: default_throttle_delay_ms(),
            timeout_seconds: default_llm_timeout(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translation_base_url(),
            chunk_limit: default_chunk_limit(),
            timeout_seconds: default_translation_timeout(),
        }
    }
}

impl LlmConfig {
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Resolve the provider credential from the config or the process environment
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An unresolved `${VAR}` survives substitution verbatim
        let configured = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.contains("${"));

        if let Some(key) = configured {
            return Ok(key.to_string());
        }

        lookup(&self.api_key_env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            })
    }
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Load a YAML or JSON config file, chosen by extension
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Err(ConfigError::NotFound(path.to_string()));
        }

        let content = read_config_text(path)?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self, ConfigError> {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }

    /// Load the first config file that exists, falling back to defaults.
    /// Returns the path that was loaded, if any.
    pub fn discover() -> Result<(Self, Option<String>), ConfigError> {
        let config_paths: Vec<String> = vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.yaml".to_string()),
            Some("conf.yml".to_string()),
            Some("conf.json".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        for path in &config_paths {
            if !Path::new(path).exists() {
                debug!("No config file at {}", path);
                continue;
            }
            let config = Self::load(path)?;
            return Ok((config, Some(path.clone())));
        }

        info!("No config file found (tried {:?}), using defaults", config_paths);
        Ok((Self::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.system_config.port, 8501);
        assert_eq!(config.llm_config.provider, "gemini_llm");
        assert_eq!(config.llm_config.throttle_delay(), Duration::from_secs(1));
        assert_eq!(config.translation_config.chunk_limit, 5000);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
llm_config:
  model: gemini-1.5-flash
  throttle_delay_ms: 0
translation_config:
  chunk_limit: 4000
"#;
        let config = Config::parse("conf.yaml", yaml).unwrap();
        assert_eq!(config.llm_config.model, "gemini-1.5-flash");
        assert!(config.llm_config.throttle_delay().is_zero());
        assert_eq!(config.llm_config.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.translation_config.chunk_limit, 4000);
        assert_eq!(config.system_config.host, "0.0.0.0");
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"system_config": {"port": 9000}}"#;
        let config = Config::parse("conf.json", json).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.llm_config.timeout_seconds, 120);
    }

    #[test]
    fn test_api_key_from_config_wins() {
        let config = LlmConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        let key = config
            .resolve_api_key_with(|_| Some("from-env".to_string()))
            .unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn test_api_key_falls_back_to_env() {
        let config = LlmConfig {
            api_key: Some("${GOOGLE_API_KEY}".to_string()),
            ..Default::default()
        };
        let key = config
            .resolve_api_key_with(|name| {
                assert_eq!(name, "GOOGLE_API_KEY");
                Some("from-env".to_string())
            })
            .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let config = LlmConfig::default();
        let err = config.resolve_api_key_with(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { ref env_var } if env_var == "GOOGLE_API_KEY"));

        let err = config
            .resolve_api_key_with(|_| Some("   ".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
