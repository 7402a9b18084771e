//! Configuration for a generation call

use crate::Schema;
use serde::{Deserialize, Serialize};

/// MIME type requesting JSON output from the provider.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Generation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct General {
    /// The model to use
    pub model: String,

    /// Sampling temperature. `None` leaves the provider default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// MIME type of the generated output, e.g. `application/json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// Schema the generated output must satisfy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

impl General {
    /// Create a new configuration
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: None,
            response_mime_type: None,
            response_schema: None,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(self, temperature: f64) -> Self {
        Self {
            temperature: Some(temperature),
            ..self
        }
    }

    /// Request strict JSON output matching `schema`
    pub fn with_json_schema(self, schema: Schema) -> Self {
        Self {
            response_mime_type: Some(JSON_MIME_TYPE.to_owned()),
            response_schema: Some(schema),
            ..self
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self::new("models/gemini-2.5-flash-lite")
    }
}
