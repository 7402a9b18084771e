//! Email rewriting: input validation, the provider call, and folding every
//! outcome into a [`RewriteResponse`].

use crate::prompt::{SYSTEM_PROMPT, user_message};
use llm::{General, LLM, Message};
use serde::{Deserialize, Serialize};

/// Longest accepted body, in characters.
pub const MAX_BODY_CHARS: usize = 3000;
/// Longest accepted subject, in characters.
pub const MAX_SUBJECT_CHARS: usize = 300;
/// Prefix of the `error` field when the provider call fails.
pub const EXCEPTION_PREFIX: &str = "EXCEPTION GENERATED: ";

/// An email to rewrite.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RewriteRequest {
    /// Subject line, may be absent or null.
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body.
    pub body: String,
}

/// The rewritten email, or an in-band error.
///
/// Keys missing from provider JSON decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteResponse {
    /// Rewritten subject line.
    pub subject: String,
    /// Rewritten body.
    pub body: String,
    /// Empty on success.
    pub error: String,
}

impl RewriteResponse {
    /// A response carrying only `error`.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Default::default()
        }
    }

    /// A response for a failed provider call.
    pub fn exception(err: &llm::Error) -> Self {
        Self::error(format!("{EXCEPTION_PREFIX}{err}"))
    }
}

/// Input rejected before reaching the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The body is blank.
    #[error("Input text is empty")]
    Empty,
    /// The body or subject exceeds its limit.
    #[error(
        "Input text is too long (> {} characters for body, > {} for subject)",
        MAX_BODY_CHARS,
        MAX_SUBJECT_CHARS
    )]
    TooLong,
}

/// A validated, trimmed email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Trimmed subject, empty when absent or blank.
    pub subject: String,
    /// Trimmed body, never empty.
    pub body: String,
}

impl Email {
    /// The user turn sent to the provider.
    pub fn user_message(&self) -> String {
        user_message(&self.subject, &self.body)
    }
}

impl RewriteRequest {
    /// Check emptiness, then length limits, then trim.
    ///
    /// Limits apply to the raw input, before trimming.
    pub fn validate(&self) -> Result<Email, InvalidInput> {
        let body = strip(&self.body);
        if body.is_empty() {
            return Err(InvalidInput::Empty);
        }

        let subject = self.subject.as_deref().unwrap_or_default();
        if self.body.chars().count() > MAX_BODY_CHARS
            || subject.chars().count() > MAX_SUBJECT_CHARS
        {
            return Err(InvalidInput::TooLong);
        }

        Ok(Email {
            subject: strip(subject).to_owned(),
            body: body.to_owned(),
        })
    }
}

/// Trim Unicode whitespace and the ASCII information separators
/// (U+001C..=U+001F), which clients also treat as blank.
pub fn strip(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Rewrite `request` through `provider`.
///
/// Never fails: validation errors and provider failures come back in the
/// `error` field. Invalid input never reaches the provider.
pub async fn professionalize<P: LLM>(
    provider: &P,
    config: &General,
    request: &RewriteRequest,
) -> RewriteResponse {
    let email = match request.validate() {
        Ok(email) => email,
        Err(e) => {
            tracing::debug!("rejected input: {e}");
            return RewriteResponse::error(e.to_string());
        }
    };

    match generate(provider, config, &email).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("error occurred while generating response: {e}");
            RewriteResponse::exception(&e)
        }
    }
}

/// One provider call, decoding the generated text as a [`RewriteResponse`].
async fn generate<P: LLM>(
    provider: &P,
    config: &General,
    email: &Email,
) -> llm::Result<RewriteResponse> {
    let messages = [
        Message::system(SYSTEM_PROMPT),
        Message::user(email.user_message()),
    ];
    let response = provider.send(config, &messages).await?;
    tracing::info!(
        "provider response (finish: {:?}, usage: {:?}): {}",
        response.finish_reason,
        response.usage,
        response.content()
    );
    Ok(serde_json::from_str(response.content())?)
}
