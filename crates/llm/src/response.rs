//! Generation responses

use serde::{Deserialize, Serialize};

/// A completed, non-streaming generation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Response {
    /// The generated text of the first candidate
    pub text: String,

    /// Why the model stopped generating
    pub finish_reason: Option<FinishReason>,

    /// Token usage statistics
    pub usage: Option<Usage>,

    /// The model version that served the request
    pub model: Option<String>,
}

impl Response {
    /// Get the generated text
    pub fn content(&self) -> &str {
        &self.text
    }
}

/// The reason the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop or stop sequence
    Stop,
    /// Output token limit reached
    Length,
    /// Output withheld by a safety filter
    Safety,
    /// Output flagged as recitation
    Recitation,
    /// Anything else the provider reports
    Other(String),
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the generated output
    pub completion_tokens: u32,
    /// Total tokens billed
    pub total_tokens: u32,
}
