//! Shared serve entrypoint, used by the binary and tests.

use crate::{AppState, GatewayConfig, router::router};
use anyhow::{Context, Result};
use gemini::Gemini;
use llm::{Client, LLM};
use tokio::sync::oneshot;

/// Handle returned by [`serve`]: holds the bound port and shutdown trigger.
pub struct ServeHandle {
    /// The port the gateway is listening on.
    pub port: u16,
    /// Send a value to trigger graceful shutdown.
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// Join handle for the server task.
    join: Option<tokio::task::JoinHandle<Result<(), std::io::Error>>>,
}

impl ServeHandle {
    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Build the Gemini provider from `config`, bind, and start serving.
///
/// Fails before binding when no API key can be resolved.
pub async fn serve(config: &GatewayConfig, bind: &str) -> Result<ServeHandle> {
    let key = config.llm.api_key()?;

    let mut client = Client::builder();
    if let Some(timeout) = config.llm.timeout() {
        client = client.timeout(timeout);
    }
    let client = client.build().context("failed to build http client")?;

    let provider = match &config.llm.base_url {
        Some(base) => Gemini::custom(client, &key, base)?,
        None => Gemini::api(client, &key)?,
    };
    tracing::info!(
        "provider initialized for model {} at {}",
        config.llm.model,
        provider.base()
    );

    serve_with_provider(provider, config, bind).await
}

/// Serve with an already-built provider. Useful when the caller supplies
/// its own [`LLM`] implementation.
pub async fn serve_with_provider<P: LLM>(
    provider: P,
    config: &GatewayConfig,
    bind: &str,
) -> Result<ServeHandle> {
    let state = AppState::new(provider, config.llm.model.clone());
    let app = router(state, config.server.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let port = listener.local_addr()?.port();
    tracing::info!("gateway listening on {bind} (port {port})");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("received shutdown signal");
            })
            .await
    });

    Ok(ServeHandle {
        port,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    })
}
