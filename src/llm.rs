//! Narration client for the two interchangeable chat-completion backends.
//!
//! One client covers both providers; the selected [`Provider`] supplies only
//! the endpoint, credential, and model differences. Narration failures are
//! converted into error-shaped text so callers can always assemble a
//! response.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use log::{error, info};
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::NarrationSettings;
use crate::prompt::SYSTEM_INSTRUCTION;

/// Which narration backend to send the prompt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Provider {
    /// Managed OpenAI endpoint; requires an API key.
    #[serde(rename = "openai")]
    #[value(name = "openai")]
    OpenAi,
    /// Locally hosted LM Studio server; needs only a base URL and model id.
    #[serde(rename = "lm_studio")]
    #[value(name = "lm-studio")]
    LmStudio,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::LmStudio => "lm_studio",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generated narrative plus the raw completion payload it came from.
/// `raw` is absent when the backend call failed and `text` carries the
/// error description instead.
#[derive(Debug, Clone)]
pub struct Narration {
    pub text: String,
    pub raw: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

pub struct NarrationClient {
    settings: NarrationSettings,
    http: HttpClient,
}

impl NarrationClient {
    pub fn new(settings: &NarrationSettings) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("eds-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            settings: settings.clone(),
            http,
        }
    }

    /// Send the prompt to the selected backend and return generated text.
    ///
    /// Never fails: on timeout or backend error the returned `text` is a
    /// human-readable error string and `raw` is `None`, so the rest of the
    /// response can still be assembled.
    pub fn narrate(&self, prompt: &str, provider: Provider) -> Narration {
        match self.complete(prompt, provider) {
            Ok((text, raw)) => Narration {
                text,
                raw: Some(raw),
            },
            Err(e) => {
                error!("error generating snapshot with {}: {:#}", provider, e);
                Narration {
                    text: format!("Error generating snapshot: {:#}", e),
                    raw: None,
                }
            }
        }
    }

    /// Connectivity probe: ask the backend for a one-sentence completion.
    pub fn ping(&self, provider: Provider) -> bool {
        self.complete("Generate a one-sentence economic analysis.", provider)
            .is_ok()
    }

    fn complete(&self, prompt: &str, provider: Provider) -> Result<(String, Value)> {
        let (base_url, api_key, model) = match provider {
            Provider::OpenAi => (
                self.settings.openai_base_url.as_str(),
                self.settings
                    .openai_api_key
                    .as_deref()
                    .context("OpenAI API key not found in environment variables")?,
                self.settings.openai_model.as_str(),
            ),
            Provider::LmStudio => (
                self.settings.lm_studio_url.as_str(),
                // LM Studio ignores the key but the endpoint expects one.
                "not-needed",
                self.settings.lm_studio_model.as_str(),
            ),
        };
        let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));

        let body = ChatRequest {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        info!("requesting completion from {} (model {})", provider, model);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .with_context(|| format!("POST {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            bail!("{} backend returned HTTP {}: {}", provider, status, detail);
        }

        let raw: Value = resp.json().context("decode completion json")?;
        let parsed: ChatResponse =
            serde_json::from_value(raw.clone()).context("parse completion payload")?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("completion contained no choices")?;

        Ok((text, raw))
    }
}
