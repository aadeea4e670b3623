use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// API key for the model provider. Held in memory for the session only.
/// Debug/Display are redacted so the secret can never leak through logs or
/// error chains; the raw value is only reachable inside this crate.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self(raw))
    }

    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(API_KEY_ENV) {
            Ok(raw) => Self::new(raw),
            Err(_) => Err(Error::MissingApiKey),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Search helper settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSettings {
    pub max_results: usize,
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 5,
            timeout_secs: 10,
        }
    }
}

/// Pipeline configuration. Model identifiers and the endpoint are
/// configuration, not logic; defaults target OpenRouter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScholarConfig {
    pub base_url: String,
    pub finder_model: String,
    pub judge_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Pass/fail presentation threshold (strictly greater than ⇒ pass).
    pub pass_threshold: f64,
    /// Upper bound on tool-call rounds in the finder, so a model that keeps
    /// requesting tools cannot loop forever.
    pub max_tool_rounds: u32,
    pub search: SearchSettings,
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            finder_model: "meta-llama/llama-3.2-3b-instruct".to_string(),
            judge_model: "deepseek/deepseek-chat".to_string(),
            temperature: 0.0,
            max_tokens: 1024,
            pass_threshold: 0.7,
            max_tool_rounds: 4,
            search: SearchSettings::default(),
        }
    }
}

impl ScholarConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
    }
}
