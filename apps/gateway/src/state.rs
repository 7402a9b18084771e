//! Shared application state for the gateway server.

use crate::prompt::{TEMPERATURE, response_schema};
use llm::{General, LLM};
use std::sync::Arc;

/// Shared state available to all request handlers.
pub struct AppState<P: LLM> {
    /// The provider (immutable after init).
    pub provider: Arc<P>,
    /// Generation config for rewrites.
    pub general: Arc<General>,
}

impl<P: LLM> AppState<P> {
    /// Wrap `provider` with the rewrite generation config for `model`.
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        let general = General::new(model)
            .with_temperature(TEMPERATURE)
            .with_json_schema(response_schema());
        Self {
            provider: Arc::new(provider),
            general: Arc::new(general),
        }
    }
}

impl<P: LLM> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            general: Arc::clone(&self.general),
        }
    }
}
