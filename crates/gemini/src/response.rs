//! Raw Gemini response bodies and their mapping onto [`llm::Response`].

use crate::request::Content;
use llm::{Error, FinishReason, Response, Usage};
use serde::Deserialize;

/// Raw `generateContent` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UsageMetadata {
    prompt_token_count: u32,
    candidates_token_count: u32,
    total_token_count: u32,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    status: Option<String>,
}

impl ErrorEnvelope {
    /// `STATUS: message`, or just the message when no status is given.
    pub(crate) fn describe(&self) -> String {
        match &self.error.status {
            Some(status) => format!("{status}: {}", self.error.message),
            None => self.error.message.clone(),
        }
    }
}

impl GenerateContentResponse {
    /// Concatenate the answer text of the first candidate.
    ///
    /// Thought parts are skipped. A response without any answer text is an
    /// [`Error::EmptyResponse`] naming the block or finish reason.
    pub(crate) fn into_response(self) -> llm::Result<Response> {
        let usage = self.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!("prompt blocked ({r})"))
                .unwrap_or_else(|| "no candidates returned".to_owned());
            return Err(Error::EmptyResponse(reason));
        };

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter(|p| !p.thought)
            .map(|p| p.text.as_str())
            .collect();

        if text.is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("UNSPECIFIED");
            return Err(Error::EmptyResponse(format!(
                "candidate has no text (finish reason {reason})"
            )));
        }

        Ok(Response {
            text,
            finish_reason: candidate.finish_reason.as_deref().map(finish_reason),
            usage,
            model: self.model_version,
        })
    }
}

fn finish_reason(raw: &str) -> FinishReason {
    match raw {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::Length,
        "SAFETY" => FinishReason::Safety,
        "RECITATION" => FinishReason::Recitation,
        other => FinishReason::Other(other.to_owned()),
    }
}
