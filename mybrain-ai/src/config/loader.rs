use super::defaults::{DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL, DEFAULT_SYSTEM_PROMPT};
use super::error::ConfigError;
use super::settings::{AiSettings, ProviderSettings};
use crate::constants::{CONFIG_PATH, ENV_PATH};
use crate::domain::types::AiProvider;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, warn};

static ENV_LOADER: Once = Once::new();

/// Raw settings structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawSettings {
    provider: Option<String>,
    system_prompt: Option<String>,
    openai: Option<RawProviderSettings>,
    gemini: Option<RawProviderSettings>,
}

#[derive(Debug, Deserialize, Default)]
struct RawProviderSettings {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Read `ai.toml` (or `path`) and build validated settings.
///
/// A missing file is an error; callers that want defaults use
/// [`AiSettings::default`].
pub fn load_settings(path: Option<&Path>) -> Result<AiSettings, ConfigError> {
    ensure_env_loaded();
    let path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    debug!(path = %path.display(), "Reading assistant settings file");

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_settings(&content, path)
}

pub(super) fn parse_settings(content: &str, path: &Path) -> Result<AiSettings, ConfigError> {
    let parsed: RawSettings = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    build(parsed)
}

fn build(parsed: RawSettings) -> Result<AiSettings, ConfigError> {
    let provider = match parsed.provider.as_deref() {
        Some(value) => AiProvider::parse_choice(value).map_err(|_| ConfigError::UnknownProvider {
            value: value.to_string(),
        })?,
        None => None,
    };

    Ok(AiSettings {
        provider,
        system_prompt: parsed
            .system_prompt
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        openai: provider_settings("openai", parsed.openai, DEFAULT_OPENAI_MODEL),
        gemini: provider_settings("gemini", parsed.gemini, DEFAULT_GEMINI_MODEL),
    })
}

fn provider_settings(
    section: &str,
    raw: Option<RawProviderSettings>,
    default_model: &str,
) -> ProviderSettings {
    let raw = raw.unwrap_or_default();
    ProviderSettings {
        api_key: resolve_api_key(section, raw.api_key.as_deref()),
        model: raw
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_model.to_string()),
        base_url: raw.base_url.unwrap_or_default().trim().to_string(),
    }
}

/// Resolve an API key that is either a literal or a whole `${VAR}` reference.
///
/// Literals are kept verbatim, `$` included. An unset variable yields an
/// empty key; the dispatcher then reports an invalid credential instead of
/// sending a request.
pub fn resolve_api_key(section: &str, value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim) else {
        return String::new();
    };
    if !is_env_reference(raw) {
        return raw.to_string();
    }
    match shellexpand::env(raw) {
        Ok(value) => value.into_owned(),
        Err(err) => {
            warn!(
                section,
                env_var = err.var_name.as_str(),
                "API key environment variable is not set"
            );
            String::new()
        }
    }
}

fn is_env_reference(value: &str) -> bool {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .is_some_and(|name| {
            !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
