//! Generation settings.
//!
//! Controls the content-generation backend: model selection, sampling,
//! and the per-call deadline the orchestrator wraps generation in.

use moot_core::{MootError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings for the content-generation capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Backend provider name (only "openai" is built in)
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier passed to the backend
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Deadline for a single generation call, in seconds. On expiry the
    /// orchestrator records a fallback reply and the trial continues.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model_name() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model_name: default_model_name(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GenerationSettings {
    /// Parses settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|err| MootError::config(format!("invalid generation settings: {err}")))
    }

    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            MootError::config(format!(
                "failed to read settings file {}: {err}",
                path.display()
            ))
        })?;
        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), model = %settings.model_name, "loaded generation settings");
        Ok(settings)
    }
}
