use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::warn;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.0-pro";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_MAX_PROMPT_ATTEMPTS: u32 = 5;

/// Application configuration loaded from environment variables.
/// API keys are not validated here; a missing key surfaces as a provider-call failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub serpapi_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub serpapi_base_url: String,
    pub output_dir: PathBuf,
    /// Rounds an operator gets at each confirm-or-redo prompt before the run is aborted.
    pub max_prompt_attempts: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_prompt_attempts = match lookup("MAX_PROMPT_ATTEMPTS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("MAX_PROMPT_ATTEMPTS must be a positive integer")?,
            None => DEFAULT_MAX_PROMPT_ATTEMPTS,
        };
        if max_prompt_attempts == 0 {
            bail!("MAX_PROMPT_ATTEMPTS must be at least 1");
        }

        Ok(Config {
            gemini_api_key: optional_secret(&lookup, "GEMINI_API_KEY"),
            serpapi_api_key: optional_secret(&lookup, "SERPAPI_API_KEY"),
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: lookup("GEMINI_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            serpapi_base_url: lookup("SERPAPI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SERPAPI_BASE_URL.to_string()),
            output_dir: lookup("PRESSKIT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            max_prompt_attempts,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
        })
    }
}

fn optional_secret(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> String {
    match lookup(key) {
        Some(value) => value,
        None => {
            warn!("Environment variable '{key}' is not set; calls that need it will fail");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.gemini_model, "gemini-1.0-pro");
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.max_prompt_attempts, 5);
        assert!(config.gemini_api_key.is_empty());
        assert!(config.serpapi_api_key.is_empty());
        assert_eq!(config.rust_log, "warn");
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("SERPAPI_API_KEY", "s-key"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("PRESSKIT_OUTPUT_DIR", "/tmp/kits"),
            ("MAX_PROMPT_ATTEMPTS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key, "g-key");
        assert_eq!(config.serpapi_api_key, "s-key");
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/kits"));
        assert_eq!(config.max_prompt_attempts, 3);
    }

    #[test]
    fn test_malformed_attempt_limit_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("MAX_PROMPT_ATTEMPTS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("MAX_PROMPT_ATTEMPTS"));
    }

    #[test]
    fn test_zero_attempt_limit_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("MAX_PROMPT_ATTEMPTS", "0")])).is_err());
    }
}
