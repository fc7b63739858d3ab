//! Backend capability trait
//!
//! One implementation exists per provider family (OpenAI-compatible,
//! Gemini-compatible). The wire protocol is entirely the implementation's
//! business.

mod error;

pub use error::BackendError;

use crate::domain::types::ChatMessage;
use async_trait::async_trait;

/// Single-operation capability implemented by each AI provider client.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Send the conversation and return the assistant reply.
    ///
    /// An empty `base_url` means the implementation's own default endpoint.
    async fn send_message(
        &self,
        base_url: &str,
        messages: &[ChatMessage],
        system_message: &str,
        model: &str,
        key: &str,
    ) -> Result<ChatMessage, BackendError>;
}
