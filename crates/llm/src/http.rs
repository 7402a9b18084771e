//! Shared JSON-over-HTTP transport for generation providers.
//!
//! `HttpProvider` wraps a `reqwest::Client` with pre-configured headers.
//! Providers serialize their own request body and decode their own response
//! shape; this type only moves bytes and maps transport failures onto
//! [`Error`].

use crate::{Error, Result};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;

/// Shared HTTP transport.
///
/// Holds a `reqwest::Client` and pre-built headers (auth + content-type).
/// The endpoint is given per call, since providers encode the model in
/// the URL.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    headers: HeaderMap,
}

impl HttpProvider {
    /// Create a transport authenticating with a custom header
    /// (e.g. Gemini's `x-goog-api-key`).
    pub fn custom_header(client: Client, header_name: &str, header_value: &str) -> Result<Self> {
        let mut headers = json_headers();
        headers.insert(
            header_name.parse::<HeaderName>()?,
            header_value.parse::<HeaderValue>()?,
        );
        Ok(Self { client, headers })
    }

    /// POST `body` as JSON to `endpoint` and return the raw response text.
    ///
    /// A non-success status yields [`Error::Status`] carrying the raw body so
    /// the provider can decode its own error envelope.
    pub async fn send_json(&self, endpoint: &str, body: &impl Serialize) -> Result<String> {
        tracing::trace!("request to {endpoint}: {}", serde_json::to_string(body)?);
        let response = self
            .client
            .request(Method::POST, endpoint)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response ({status}): {text}");
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(text)
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
