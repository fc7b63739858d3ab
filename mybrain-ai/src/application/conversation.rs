use super::dispatch::{AiDispatcher, DispatchResult};
use crate::config::AiSettings;
use crate::domain::types::ChatMessage;
use tracing::debug;

/// Caller-side chat history. The dispatcher itself never keeps one.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    history: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: Vec<ChatMessage>) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Send `text` as the next user turn.
    ///
    /// On success both the user message and the reply are appended. On any
    /// failure, or if the future is dropped mid-call, the history is left as
    /// it was so the turn can be retried.
    pub async fn send(
        &mut self,
        dispatcher: &AiDispatcher,
        settings: &AiSettings,
        text: impl Into<String>,
    ) -> DispatchResult {
        let mut outgoing = Vec::with_capacity(self.history.len() + 2);
        outgoing.extend_from_slice(&self.history);
        outgoing.push(ChatMessage::user(text));

        let result = dispatcher.dispatch(settings.request(&outgoing)).await;
        if let DispatchResult::Success(reply) = &result {
            outgoing.push(reply.clone());
            self.history = outgoing;
            debug!(turns = self.history.len(), "Conversation extended");
        }
        result
    }
}
