//! AI assistant layer for MyBrain.
//!
//! Routes a single chat request to one of two backend capabilities
//! (OpenAI-compatible or Gemini-compatible) and folds every outcome into a
//! [`DispatchResult`].
//!
//! # Structure
//! - `domain` - chat messages and the provider selector
//! - `infrastructure::backend` - the `AiBackend` capability and its error type
//! - `application` - the dispatcher and a caller-side conversation holder
//! - `config` - assistant settings loaded from TOML

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{conversation, dispatch};
pub use application::conversation::Conversation;
pub use application::dispatch::{AiDispatcher, DispatchRequest, DispatchResult};
pub use config::{AiSettings, ConfigError};
pub use domain::types;
pub use domain::types::{AiProvider, ChatMessage, MessageRole};
pub use infrastructure::backend::{AiBackend, BackendError};

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global fmt subscriber. Safe to call more than once.
///
/// Honours `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .try_init();
    });
}
