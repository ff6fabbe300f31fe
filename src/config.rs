//! Narration backend settings, read once at startup and validated eagerly.

use std::env;

use thiserror::Error;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_LM_STUDIO_URL: &str = "http://127.0.0.1:1234/v1";
pub const DEFAULT_LM_STUDIO_MODEL: &str = "mistral-7b-instruct-v0.1:2";

/// Startup validation failure; lists every missing field at once.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required narration settings: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Configuration for both narration backends plus the shared generation
/// parameters. Constructed once and passed by reference into
/// [`crate::NarrationClient`]; there is no global settings object.
#[derive(Debug, Clone)]
pub struct NarrationSettings {
    /// Required only when the managed provider is selected.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub lm_studio_url: String,
    pub lm_studio_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Bound on the narration wait. Generation against a local model can
    /// take minutes.
    pub timeout_secs: u64,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.into(),
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            lm_studio_url: DEFAULT_LM_STUDIO_URL.into(),
            lm_studio_model: DEFAULT_LM_STUDIO_MODEL.into(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout_secs: 300,
        }
    }
}

impl NarrationSettings {
    /// Read settings from the environment. Empty variables count as unset.
    pub fn from_env() -> Self {
        let get = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();
        settings.openai_api_key = get("OPENAI_API_KEY");
        if let Some(v) = get("OPENAI_BASE_URL") {
            settings.openai_base_url = v;
        }
        if let Some(v) = get("OPENAI_MODEL") {
            settings.openai_model = v;
        }
        if let Some(v) = get("LM_STUDIO_URL") {
            settings.lm_studio_url = v;
        }
        if let Some(v) = get("LM_STUDIO_MODEL") {
            settings.lm_studio_model = v;
        }
        settings
    }

    /// Check required local-backend fields, collecting every missing one so
    /// a misconfigured startup fails with the full list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.lm_studio_url.trim().is_empty() {
            missing.push("LM_STUDIO_URL".to_string());
        }
        if self.lm_studio_model.trim().is_empty() {
            missing.push("LM_STUDIO_MODEL".to_string());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingFields(missing))
        }
    }
}
