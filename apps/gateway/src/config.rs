//! Gateway configuration loaded from TOML and the environment.

use crate::utils::{expand_env_vars, expand_vars_with};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Model used when the config names none.
pub const DEFAULT_MODEL: &str = "models/gemini-2.5-flash-lite";
/// Directory of the pre-built front-end bundle.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Top-level gateway configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// LLM provider configuration.
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Server configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory served at `/`. `None` disables static hosting.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
            static_dir: Some(PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }
}

/// LLM provider configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier.
    pub model: String,
    /// API key (supports `${ENV_VAR}` expansion). Falls back to
    /// `GEMINI_API_KEY` when empty.
    pub api_key: String,
    /// Optional base URL override for the provider endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Upper bound on a single provider call, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            api_key: format!("${{{API_KEY_ENV}}}"),
            base_url: None,
            timeout_secs: Some(60),
        }
    }
}

impl LlmConfig {
    /// Resolve the API key from the config value or the environment.
    pub fn api_key(&self) -> Result<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key, reading variables through `lookup`.
    ///
    /// Fails when neither the config value nor `GEMINI_API_KEY` yields a
    /// non-blank key.
    pub fn api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        let key = expand_vars_with(&self.api_key, &lookup);
        if !key.trim().is_empty() {
            return Ok(key.trim().to_owned());
        }

        match lookup(API_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_owned()),
            _ => bail!("{API_KEY_ENV} not set"),
        }
    }

    /// The provider call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl GatewayConfig {
    /// Parse a TOML string into a `GatewayConfig`, expanding environment
    /// variables in supported fields.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// The `host:port` the server binds.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
