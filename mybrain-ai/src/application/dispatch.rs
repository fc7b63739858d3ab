//! Provider routing and outcome classification
//!
//! [`AiDispatcher::dispatch`] validates the credential, invokes exactly one
//! backend and maps whatever happens into a [`DispatchResult`]. Faults never
//! escape to the caller.

use crate::constants::GEMINI_BASE_URL;
use crate::domain::types::{AiProvider, ChatMessage};
use crate::infrastructure::backend::{AiBackend, BackendError};
use futures::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Per-call request. Borrowed from the caller and discarded after the call.
#[derive(Clone, Copy)]
pub struct DispatchRequest<'a> {
    pub history: &'a [ChatMessage],
    pub system_prompt: &'a str,
    pub credential: &'a str,
    pub model: &'a str,
    pub provider: Option<AiProvider>,
    /// Used verbatim for OpenAI-compatible backends, ignored for Gemini.
    pub base_url_override: &'a str,
}

impl<'a> DispatchRequest<'a> {
    pub fn new(
        history: &'a [ChatMessage],
        credential: &'a str,
        model: &'a str,
        provider: Option<AiProvider>,
    ) -> Self {
        Self {
            history,
            system_prompt: "",
            credential,
            model,
            provider,
            base_url_override: "",
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: &'a str) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    pub fn with_base_url(mut self, base_url_override: &'a str) -> Self {
        self.base_url_override = base_url_override;
        self
    }
}

impl fmt::Debug for DispatchRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchRequest")
            .field("history", &self.history.len())
            .field("system_prompt", &self.system_prompt)
            .field("credential", &"<redacted>")
            .field("model", &self.model)
            .field("provider", &self.provider)
            .field("base_url_override", &self.base_url_override)
            .finish()
    }
}

/// Outcome of one dispatch. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Success(ChatMessage),
    InvalidCredential,
    TransportFailure,
    UnclassifiedFailure,
}

impl DispatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Success(_))
    }

    pub fn into_reply(self) -> Option<ChatMessage> {
        match self {
            DispatchResult::Success(reply) => Some(reply),
            _ => None,
        }
    }

    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            DispatchResult::Success(_) => None,
            DispatchResult::InvalidCredential => {
                Some("Your API key is missing. Add it in the assistant settings.")
            }
            DispatchResult::TransportFailure => {
                Some("Could not reach the AI provider. Check your internet connection.")
            }
            DispatchResult::UnclassifiedFailure => {
                Some("Something went wrong, please try again.")
            }
        }
    }
}

/// Internal failure before classification.
enum RouteError {
    NoProviderChosen,
    Backend(BackendError),
    Panicked,
}

/// Routes chat requests to one of two backend capabilities.
#[derive(Clone)]
pub struct AiDispatcher {
    openai: Arc<dyn AiBackend>,
    gemini: Arc<dyn AiBackend>,
}

impl AiDispatcher {
    pub fn new(openai: Arc<dyn AiBackend>, gemini: Arc<dyn AiBackend>) -> Self {
        Self { openai, gemini }
    }

    pub async fn dispatch(&self, request: DispatchRequest<'_>) -> DispatchResult {
        if request.credential.trim().is_empty() {
            warn!(
                provider = ?request.provider,
                "Rejecting AI request: credential is blank"
            );
            return DispatchResult::InvalidCredential;
        }

        let routed = AssertUnwindSafe(self.route(&request))
            .catch_unwind()
            .await
            .unwrap_or(Err(RouteError::Panicked));

        match routed {
            Ok(reply) => {
                debug!(provider = ?request.provider, "Received AI reply");
                DispatchResult::Success(reply)
            }
            Err(RouteError::NoProviderChosen) => {
                error!("No AI provider is chosen");
                DispatchResult::UnclassifiedFailure
            }
            Err(RouteError::Backend(err)) if err.is_transport() => {
                warn!(provider = ?request.provider, %err, "AI backend unreachable");
                DispatchResult::TransportFailure
            }
            Err(RouteError::Backend(err)) => {
                warn!(provider = ?request.provider, %err, "AI backend call failed");
                DispatchResult::UnclassifiedFailure
            }
            Err(RouteError::Panicked) => {
                error!(provider = ?request.provider, "AI backend panicked");
                DispatchResult::UnclassifiedFailure
            }
        }
    }

    async fn route(&self, request: &DispatchRequest<'_>) -> Result<ChatMessage, RouteError> {
        let (backend, base_url) = match request.provider {
            Some(AiProvider::OpenAi) => (&self.openai, request.base_url_override),
            Some(AiProvider::Gemini) => (&self.gemini, GEMINI_BASE_URL),
            None => return Err(RouteError::NoProviderChosen),
        };

        info!(
            provider = ?request.provider,
            model = request.model,
            messages = request.history.len(),
            "Sending AI message"
        );

        backend
            .send_message(
                base_url,
                request.history,
                request.system_prompt,
                request.model,
                request.credential,
            )
            .await
            .map_err(RouteError::Backend)
    }
}
