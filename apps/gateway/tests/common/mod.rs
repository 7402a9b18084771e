//! Test providers.

#![allow(dead_code)]

use llm::{Error, General, LLM, Message, Response, Result};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Answers every call with fixed text and records what it was sent.
#[derive(Clone, Default)]
pub struct CannedProvider {
    pub text: String,
    pub calls: Arc<AtomicUsize>,
    pub last: Arc<Mutex<Option<(General, Vec<Message>)>>>,
}

impl CannedProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LLM for CannedProvider {
    async fn send(&self, config: &General, messages: &[Message]) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((config.clone(), messages.to_vec()));
        Ok(Response {
            text: self.text.clone(),
            ..Default::default()
        })
    }
}

/// Fails every call the way an unreachable provider would.
#[derive(Clone)]
pub struct FailingProvider;

impl LLM for FailingProvider {
    async fn send(&self, _config: &General, _messages: &[Message]) -> Result<Response> {
        Err(Error::Status {
            status: 503,
            message: "UNAVAILABLE: The model is overloaded.".to_owned(),
        })
    }
}
