use std::fs;

use regex::Regex;

use crate::error::ConfigError;

/// Read a config file, decoding it and substituting `${VAR}` placeholders
pub fn read_config_text(config_path: &str) -> Result<String, ConfigError> {
    let bytes = fs::read(config_path)?;
    let content = decode_text(&bytes);
    substitute_env_vars(&content, |name| std::env::var(name).ok())
}

/// Decode as UTF-8, honouring a byte order mark if present
pub fn decode_text(bytes: &[u8]) -> String {
    let (cow, _, _) = encoding_rs::UTF_8.decode(bytes);
    cow.into_owned()
}

/// Replace environment variables: `${VAR_NAME}`.
/// Unknown variables are left as written.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}
