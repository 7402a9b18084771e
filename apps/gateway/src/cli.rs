//! Command-line arguments for the gateway binary.

use crate::{GatewayConfig, serve};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Rewrite emails into corporate prose over HTTP.
#[derive(Parser, Debug)]
#[command(name = "corpspeak", version, about = "Rewrite emails into corporate prose over HTTP")]
pub struct Cli {
    /// Path to a gateway.toml. Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind, overriding the config.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding the config.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory of static front-end files, overriding the config.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    /// Load the config file, if any, and apply flag overrides.
    pub fn resolve_config(&self) -> Result<GatewayConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let config = GatewayConfig::load(path)?;
                tracing::info!("loaded configuration from {}", path.display());
                config
            }
            None => {
                tracing::info!("no config file given, using defaults");
                GatewayConfig::default()
            }
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = Some(dir.clone());
        }
        Ok(config)
    }

    /// Start the gateway and run until ctrl-c.
    ///
    /// A missing API key is reported before anything binds.
    pub async fn run(self) -> Result<()> {
        let config = self.resolve_config()?;
        let handle = serve(&config, &config.bind_address()).await?;

        tokio::signal::ctrl_c().await?;
        tracing::info!("received ctrl-c, shutting down");
        handle.shutdown().await?;
        tracing::info!("gateway shut down");
        Ok(())
    }
}
