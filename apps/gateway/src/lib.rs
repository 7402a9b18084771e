//! Corpspeak gateway: validates an email, asks the provider for a
//! corporate rewrite under a strict JSON schema, and hands the JSON back.

#[cfg(feature = "cli")]
pub use cli::Cli;
pub use config::GatewayConfig;
pub use rewrite::{InvalidInput, RewriteRequest, RewriteResponse, professionalize};
pub use serve::{ServeHandle, serve, serve_with_provider};
pub use state::AppState;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod prompt;
pub mod rewrite;
pub mod router;
pub mod serve;
pub mod state;
pub mod utils;
