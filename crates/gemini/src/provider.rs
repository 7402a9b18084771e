//! LLM trait implementation for the Gemini provider.

use crate::{
    Gemini, Request,
    response::{ErrorEnvelope, GenerateContentResponse},
};
use llm::{Error, General, LLM, Message, Response, Result};

impl LLM for Gemini {
    async fn send(&self, config: &General, messages: &[Message]) -> Result<Response> {
        let body = Request::from(config).messages(messages);
        let endpoint = self.endpoint(&config.model);
        let text = self
            .http
            .send_json(&endpoint, &body)
            .await
            .map_err(decode_status)?;

        tracing::debug!("response: {text}");
        let raw: GenerateContentResponse = serde_json::from_str(&text)?;
        raw.into_response()
    }
}

/// Replace a raw error body with the message from Gemini's error envelope.
fn decode_status(err: Error) -> Error {
    match err {
        Error::Status { status, message } => {
            let message = serde_json::from_str::<ErrorEnvelope>(&message)
                .map(|envelope| envelope.describe())
                .unwrap_or(message);
            Error::Status { status, message }
        }
        other => other,
    }
}
