//! Google Gemini LLM provider.
//!
//! Implements the Gemini `generateContent` REST API, which differs from the
//! OpenAI chat completions format in message structure, system prompt
//! placement, and structured output configuration.

use llm::{Client, HttpProvider};
pub use request::Request;

mod provider;
mod request;
mod response;

/// Gemini endpoint defaults.
pub mod endpoint {
    /// Generative Language API base URL.
    pub const BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Header carrying the API key.
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
}

/// The Gemini LLM provider.
#[derive(Clone)]
pub struct Gemini {
    /// Transport holding the client and auth headers.
    http: HttpProvider,
    /// API base URL, without a trailing slash.
    base: String,
}

impl Gemini {
    /// Create a provider targeting the public Gemini API.
    pub fn api(client: Client, key: &str) -> llm::Result<Self> {
        Self::custom(client, key, endpoint::BASE)
    }

    /// Create a provider targeting a custom Gemini-compatible base URL.
    pub fn custom(client: Client, key: &str, base: &str) -> llm::Result<Self> {
        let base = base.trim_end_matches('/');
        let http = HttpProvider::custom_header(client, endpoint::API_KEY_HEADER, key)?;
        Ok(Self {
            http,
            base: base.to_owned(),
        })
    }

    /// Get the API base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The `generateContent` URL for `model`.
    ///
    /// Bare model names get the `models/` prefix the API expects.
    pub fn endpoint(&self, model: &str) -> String {
        let model = model.trim_start_matches('/');
        if model.starts_with("models/") || model.starts_with("tunedModels/") {
            format!("{}/{model}:generateContent", self.base)
        } else {
            format!("{}/models/{model}:generateContent", self.base)
        }
    }
}
