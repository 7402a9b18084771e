//! Provider abstraction for the LLM interface

use crate::{General, Message, Response, Result};

/// A trait for generation providers
///
/// Providers are shared read-only across requests, so `send` takes `&self`
/// and implementors are expected to be cheap to clone.
pub trait LLM: Clone + Send + Sync + 'static {
    /// Send the conversation and wait for the full generation
    fn send(
        &self,
        config: &General,
        messages: &[Message],
    ) -> impl Future<Output = Result<Response>> + Send;
}
