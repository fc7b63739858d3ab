//! Backend fault type

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Faults an [`AiBackend`](super::AiBackend) may report.
///
/// Only [`BackendError::Transport`] is connectivity-class; the dispatcher
/// collapses every other variant into one unclassified failure.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error: {source}")]
    Transport {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error("backend returned an error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("backend returned invalid response: {reason}")]
    InvalidResponse { reason: String },
    #[error("{0}")]
    Other(String),
}

impl BackendError {
    pub fn transport(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, BackendError::Transport { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            BackendError::Transport { .. } => {
                "Could not reach the AI provider. Check your internet connection.".to_string()
            }
            BackendError::Api { status, .. } => {
                format!("The AI provider rejected the request (status {status}).")
            }
            BackendError::InvalidResponse { .. } => {
                "The AI provider sent a response that could not be read.".to_string()
            }
            BackendError::Other(_) => "Something went wrong, please try again.".to_string(),
        }
    }
}

impl From<io::Error> for BackendError {
    fn from(err: io::Error) -> Self {
        Self::transport(err)
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::invalid_response(err.to_string())
        } else if let Some(status) = err.status() {
            Self::api(status.as_u16(), err.to_string())
        } else if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            Self::transport(err)
        } else {
            // builder (bad URL), redirect loops and upgrade failures
            Self::other(err.to_string())
        }
    }
}
