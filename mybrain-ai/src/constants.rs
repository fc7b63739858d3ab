//! Application constants
//!
//! Single source of truth for endpoints and paths.

/// Endpoint used for every Gemini request, regardless of caller overrides
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Default assistant settings file path
pub const CONFIG_PATH: &str = "config/ai.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";
