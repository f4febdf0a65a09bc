use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("No response text generated")]
    EmptyResponse,

    #[error("Unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
}

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed translation response: {0}")]
    MalformedResponse(String),

    #[error("Text too long for a single translation call: {length} > {max} characters")]
    TextTooLong { length: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("API Key is missing! Set {env_var} in the environment or llm_config.api_key in the config file")]
    MissingApiKey { env_var: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("⚠️ Please enter both source and destination locations!")]
    MissingLocations,

    #[error("⚠️ Return date {return_date} is before departure date {departure}")]
    InvalidDateRange {
        departure: NaiveDate,
        return_date: NaiveDate,
    },
}
