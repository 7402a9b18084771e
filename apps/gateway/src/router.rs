//! HTTP routes: health, the rewrite endpoint, and the static front-end.

use crate::{AppState, RewriteRequest, RewriteResponse, professionalize};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use llm::LLM;
use serde_json::{Value, json};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir};

/// Build the axum router.
///
/// `static_dir`, when given and present on disk, is served at `/` with
/// `index.html` for directory requests. CORS is fully permissive.
pub fn router<P: LLM>(state: AppState<P>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/professionalize", post(rewrite::<P>))
        .with_state(state);

    match static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!("serving static files from {}", dir.display());
            app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
        }
        Some(dir) => tracing::warn!(
            "static directory {} not found, front-end disabled",
            dir.display()
        ),
        None => {}
    }

    app.layer(CorsLayer::very_permissive())
}

/// Liveness check.
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Rewrite an email. Always answers 200 once the body decodes.
async fn rewrite<P: LLM>(
    State(state): State<AppState<P>>,
    Json(request): Json<RewriteRequest>,
) -> Json<RewriteResponse> {
    Json(professionalize(state.provider.as_ref(), &state.general, &request).await)
}
