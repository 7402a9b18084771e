//! End-to-end HTTP tests against a served gateway.

mod common;

use common::{CannedProvider, FailingProvider};
use corpspeak_gateway::{GatewayConfig, ServeHandle, serve, serve_with_provider};
use llm::{LLM, NoopProvider};
use serde_json::{Value, json};
use std::{
    path::Path,
    time::{Duration, Instant},
};

async fn start<P: LLM>(provider: P, static_dir: Option<&Path>) -> (ServeHandle, String) {
    let mut config = GatewayConfig::default();
    config.server.static_dir = static_dir.map(Path::to_path_buf);
    let handle = serve_with_provider(provider, &config, "127.0.0.1:0")
        .await
        .expect("serve");
    let base = format!("http://127.0.0.1:{}", handle.port);
    (handle, base)
}

async fn post(base: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{base}/professionalize"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn health_is_ok_without_touching_provider() {
    let (handle, base) = start(NoopProvider, None).await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "ok": true }));
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn rewrite_returns_provider_json() {
    let provider = CannedProvider::new(
        r#"{"subject":"Re: Budgetary Synergies","body":"Per my last email...","error":""}"#,
    );
    let (handle, base) = start(provider.clone(), None).await;

    let (status, body) = post(
        &base,
        json!({ "subject": "Re: Budget", "body": "This is unacceptable, fix it now." }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "subject": "Re: Budgetary Synergies", "body": "Per my last email...", "error": "" })
    );
    assert_eq!(provider.calls(), 1);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn null_and_missing_subject_are_accepted() {
    let provider = CannedProvider::new(r#"{"subject":"","body":"ok","error":""}"#);
    let (handle, base) = start(provider.clone(), None).await;

    let (status, _) = post(&base, json!({ "subject": null, "body": "hi" })).await;
    assert_eq!(status, 200);
    let (status, _) = post(&base, json!({ "body": "hi" })).await;
    assert_eq!(status, 200);
    assert_eq!(provider.calls(), 2);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn validation_errors_are_in_band() {
    let (handle, base) = start(NoopProvider, None).await;

    let (status, body) = post(&base, json!({ "subject": "x", "body": "   " })).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "subject": "", "body": "", "error": "Input text is empty" })
    );

    let (status, body) = post(&base, json!({ "body": "a".repeat(3001) })).await;
    assert_eq!(status, 200);
    assert!(body["error"].as_str().unwrap().starts_with("Input text is too long"));
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn provider_failure_is_in_band() {
    let (handle, base) = start(FailingProvider, None).await;

    let (status, body) = post(&base, json!({ "body": "hi" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["subject"], "");
    assert_eq!(body["body"], "");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("EXCEPTION GENERATED: ")
    );
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn missing_body_is_rejected_by_extractor() {
    let (handle, base) = start(NoopProvider, None).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/professionalize"))
        .json(&json!({ "subject": "only a subject" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (handle, base) = start(NoopProvider, None).await;
    let response = reqwest::Client::new()
        .get(format!("{base}/health"))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();
    let allowed = response
        .headers()
        .get("access-control-allow-origin")
        .expect("cors header");
    assert_eq!(allowed, "http://example.com");
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn static_front_end_is_served_at_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>corpspeak</h1>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
    let (handle, base) = start(NoopProvider, Some(dir.path())).await;

    let index = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(index.status().as_u16(), 200);
    assert_eq!(index.text().await.unwrap(), "<h1>corpspeak</h1>");

    let script = reqwest::get(format!("{base}/app.js")).await.unwrap();
    assert_eq!(script.text().await.unwrap(), "console.log(1)");

    // API routes still win over the static fallback.
    let health: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["ok"], true);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn missing_static_dir_only_disables_front_end() {
    let (handle, base) = start(NoopProvider, Some(Path::new("/nonexistent/corpspeak"))).await;
    let root = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(root.status().as_u16(), 404);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn serve_refuses_to_start_without_key() {
    let mut config = GatewayConfig::default();
    config.llm.api_key = "${CORPSPEAK_TEST_UNSET_KEY_VAR}".to_owned();
    // Only meaningful when the fallback variable is also absent.
    if std::env::var("GEMINI_API_KEY").is_ok_and(|k| !k.trim().is_empty()) {
        return;
    }
    let err = serve(&config, "127.0.0.1:0").await.err().expect("no key");
    assert!(err.to_string().contains("GEMINI_API_KEY not set"));
}

/// Config for the real Gemini provider pointed at `addr`.
fn gemini_config(addr: std::net::SocketAddr, timeout_secs: Option<u64>) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.server.static_dir = None;
    config.llm.api_key = "test-key".to_owned();
    config.llm.base_url = Some(format!("http://{addr}/v1beta"));
    config.llm.timeout_secs = timeout_secs;
    config
}

#[tokio::test]
async fn unreachable_provider_is_network_failure_in_band() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let handle = serve(&gemini_config(addr, Some(5)), "127.0.0.1:0")
        .await
        .expect("serve");
    let base = format!("http://127.0.0.1:{}", handle.port);

    let (status, body) = post(&base, json!({ "subject": "Re: Budget", "body": "fix it" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["subject"], "");
    assert_eq!(body["body"], "");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("EXCEPTION GENERATED: network failure")
    );
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn stalled_provider_times_out_in_band() {
    // Accept connections and hold them open without ever answering.
    let stalled = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = stalled.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = stalled.accept().await {
            held.push(socket);
        }
    });

    let handle = serve(&gemini_config(addr, Some(1)), "127.0.0.1:0")
        .await
        .expect("serve");
    let base = format!("http://127.0.0.1:{}", handle.port);

    let started = Instant::now();
    let (status, body) = post(&base, json!({ "body": "fix it" })).await;
    let elapsed = started.elapsed();

    assert_eq!(status, 200);
    assert_eq!(body["subject"], "");
    assert_eq!(body["body"], "");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("EXCEPTION GENERATED: network failure")
    );
    assert!(elapsed >= Duration::from_millis(900), "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(10), "returned after {elapsed:?}");
    handle.shutdown().await.unwrap();
}
