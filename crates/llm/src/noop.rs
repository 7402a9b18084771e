//! No-op LLM provider for testing.
//!
//! Implements [`LLM`] but panics on `send`. Intended for tests that must
//! prove a code path never reaches the provider.

use crate::{General, LLM, Message, Response, Result};

/// A no-op LLM provider that panics on any actual LLM call.
///
/// # Panics
///
/// `send` panics if called. Only use this provider in tests that never
/// invoke the provider.
#[derive(Clone, Copy)]
pub struct NoopProvider;

impl LLM for NoopProvider {
    async fn send(&self, _config: &General, _messages: &[Message]) -> Result<Response> {
        panic!("NoopProvider::send called, not intended for real LLM calls");
    }
}
