// Test doubles for the AiBackend capability.
//
// RecordingBackend remembers every call and answers with a fixed outcome.

#![allow(dead_code)]

use async_trait::async_trait;
use mybrain_ai::{AiBackend, BackendError, ChatMessage};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub base_url: String,
    pub messages: Vec<ChatMessage>,
    pub system_message: String,
    pub model: String,
    pub key: String,
}

pub enum Outcome {
    Reply(String),
    /// Reply only after sleeping; lets tests drop the call while in flight.
    Delayed(Duration, String),
    Fail(Box<dyn Fn() -> BackendError + Send + Sync>),
    Panic,
}

pub struct RecordingBackend {
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingBackend {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with_outcome(Outcome::Reply(text.to_string()))
    }

    pub fn failing(make: impl Fn() -> BackendError + Send + Sync + 'static) -> Arc<Self> {
        Self::with_outcome(Outcome::Fail(Box::new(make)))
    }

    pub fn replying_after(delay: Duration, text: &str) -> Arc<Self> {
        Self::with_outcome(Outcome::Delayed(delay, text.to_string()))
    }

    pub fn panicking() -> Arc<Self> {
        Self::with_outcome(Outcome::Panic)
    }

    pub fn with_outcome(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

#[async_trait]
impl AiBackend for RecordingBackend {
    async fn send_message(
        &self,
        base_url: &str,
        messages: &[ChatMessage],
        system_message: &str,
        model: &str,
        key: &str,
    ) -> Result<ChatMessage, BackendError> {
        self.calls.lock().expect("calls lock").push(RecordedCall {
            base_url: base_url.to_string(),
            messages: messages.to_vec(),
            system_message: system_message.to_string(),
            model: model.to_string(),
            key: key.to_string(),
        });

        match &self.outcome {
            Outcome::Reply(text) => Ok(ChatMessage::assistant(text.clone())),
            Outcome::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(ChatMessage::assistant(text.clone()))
            }
            Outcome::Fail(make) => Err(make()),
            Outcome::Panic => panic!("backend exploded"),
        }
    }
}
