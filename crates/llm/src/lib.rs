//! Provider-agnostic LLM interface types and traits.
//!
//! This crate provides the shared types used by every generation provider:
//! `Message`, `General`, `Schema`, `Response`, the closed `Error` set, and the
//! `LLM` trait. Also provides `HttpProvider`, the JSON-over-HTTP transport
//! providers build on.

pub use config::{General, JSON_MIME_TYPE};
pub use error::{Error, Result};
pub use http::HttpProvider;
pub use message::{Message, Role};
pub use noop::NoopProvider;
pub use provider::LLM;
pub use reqwest::{self, Client};
pub use response::{FinishReason, Response, Usage};
pub use schema::{Schema, SchemaType};

mod config;
mod error;
mod http;
mod message;
mod noop;
mod provider;
mod response;
mod schema;
