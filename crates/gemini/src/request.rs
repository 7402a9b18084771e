//! Request body for the Gemini `generateContent` API.

use llm::{General, Message, Role, Schema};
use serde::{Deserialize, Serialize};

/// The request body for the Gemini `generateContent` API.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// System prompt (top-level, not in contents).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// The conversation turns.
    pub contents: Vec<Content>,
    /// Sampling and output format controls.
    #[serde(skip_serializing_if = "GenerationConfig::is_empty")]
    pub generation_config: GenerationConfig,
}

/// A single turn, or the system instruction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`; absent on the system instruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Text parts of the turn.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A content block holding a single text part.
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_owned),
            parts: vec![Part {
                text: text.into(),
                thought: false,
            }],
        }
    }
}

/// A text part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// The text of the part.
    #[serde(default)]
    pub text: String,
    /// Whether the part is model reasoning rather than answer text.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub thought: bool,
}

/// Generation controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Output MIME type, `application/json` for structured output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema the output must satisfy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

impl GenerationConfig {
    /// Whether every control is left at the provider default.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.response_mime_type.is_none()
            && self.response_schema.is_none()
    }
}

impl Request {
    /// Build the request with the given messages, lifting system messages
    /// into the system instruction and the rest into `contents`.
    pub fn messages(&self, messages: &[Message]) -> Self {
        let mut system: Vec<&str> = self
            .system_instruction
            .iter()
            .flat_map(|c| c.parts.iter().map(|p| p.text.as_str()))
            .collect();
        let mut contents = self.contents.clone();

        for msg in messages {
            match msg.role {
                Role::System => system.push(&msg.content),
                Role::User => contents.push(Content::text(Some("user"), msg.content.clone())),
                Role::Model => contents.push(Content::text(Some("model"), msg.content.clone())),
            }
        }

        let system_instruction = if system.is_empty() {
            None
        } else {
            Some(Content::text(None, system.join("\n\n")))
        };

        Self {
            system_instruction,
            contents,
            generation_config: self.generation_config.clone(),
        }
    }
}

impl From<&General> for Request {
    fn from(config: &General) -> Self {
        Self {
            system_instruction: None,
            contents: Vec::new(),
            generation_config: GenerationConfig {
                temperature: config.temperature,
                response_mime_type: config.response_mime_type.clone(),
                response_schema: config.response_schema.clone(),
            },
        }
    }
}
