//! # Assistant Settings
//!
//! Provider choice and per-provider credentials for the AI assistant.
//!
//! ```toml
//! provider = "gemini"
//! system_prompt = "You are a helpful assistant."
//!
//! [openai]
//! api_key = "${OPENAI_API_KEY}"
//! model = "gpt-4o-mini"
//! base_url = "https://my-proxy.example.com/v1"
//!
//! [gemini]
//! api_key = "${GEMINI_API_KEY}"
//! model = "gemini-1.5-flash"
//! ```

use super::defaults::{DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL, DEFAULT_SYSTEM_PROMPT};
use super::error::ConfigError;
use crate::application::dispatch::DispatchRequest;
use crate::domain::types::{AiProvider, ChatMessage};
use std::fmt;
use std::path::Path;

/// Credentials and model for one provider family.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: String,
    pub model: String,
    /// Only honoured for OpenAI-compatible providers. Empty means default.
    pub base_url: String,
}

impl ProviderSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            model: model.into(),
            base_url: String::new(),
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("ProviderSettings")
            .field("api_key", &key)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Assistant settings loaded from `ai.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiSettings {
    pub provider: Option<AiProvider>,
    pub system_prompt: String,
    pub openai: ProviderSettings,
    pub gemini: ProviderSettings,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            openai: ProviderSettings::new(DEFAULT_OPENAI_MODEL),
            gemini: ProviderSettings::new(DEFAULT_GEMINI_MODEL),
        }
    }
}

impl AiSettings {
    /// Load settings from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_settings(path)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_settings(content, Path::new("<inline>"))
    }

    /// Settings of the active provider. Falls back to OpenAI when no
    /// provider is chosen so the credential check still runs first.
    pub fn active(&self) -> &ProviderSettings {
        match self.provider {
            Some(AiProvider::Gemini) => &self.gemini,
            Some(AiProvider::OpenAi) | None => &self.openai,
        }
    }

    /// Build the dispatch request for the active provider.
    pub fn request<'a>(&'a self, history: &'a [ChatMessage]) -> DispatchRequest<'a> {
        let active = self.active();
        DispatchRequest::new(history, &active.api_key, &active.model, self.provider)
            .with_system_prompt(&self.system_prompt)
            .with_base_url(&active.base_url)
    }
}
