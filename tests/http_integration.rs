use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use scriptony_web::AppState;
use scriptony_web::config::AppConfig;
use scriptony_web::error::HealthError;
use scriptony_web::health::{ReleaseInfo, ReleaseSource};
use scriptony_web::server::build_router;
use serde_json::Value;

fn server_with(args: &[&str]) -> TestServer {
    let mut argv = vec!["scriptony-web"];
    argv.extend_from_slice(args);
    let config = AppConfig::load_from_args(argv).expect("config");
    TestServer::new(build_router(AppState::from_config(Arc::new(config)))).expect("test server")
}

#[derive(Debug)]
struct PanickingRelease;

impl ReleaseSource for PanickingRelease {
    fn release(&self) -> Result<ReleaseInfo, HealthError> {
        panic!("thread 'worker' panicked at src/secret.rs:42")
    }
}

#[tokio::test]
async fn health_reports_configured_release() {
    let server = server_with(&["--app-version", "2.5.0", "--environment", "production"]);

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "2.5.0");
    assert_eq!(body["environment"], "production");
    assert!(body.get("error").is_none());

    let timestamp = body["timestamp"].as_str().expect("timestamp string");
    let parsed = DateTime::parse_from_rfc3339(timestamp).expect("ISO-8601 timestamp");
    let drift = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
    assert!(drift.num_seconds().abs() < 5);
}

#[tokio::test]
async fn health_is_never_cached() {
    let server = server_with(&[]);
    let response = server.get("/api/health").await;
    assert_eq!(response.header("cache-control"), "no-store");
}

#[tokio::test]
async fn health_panic_becomes_generic_500() {
    let config = AppConfig::load_from_args(["scriptony-web"]).expect("config");
    let mut state = AppState::from_config(Arc::new(config));
    state.release = Arc::new(PanickingRelease);
    let server = TestServer::new(build_router(state)).expect("test server");

    let response = server.get("/api/health").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let text = response.text();
    assert!(!text.contains("secret.rs"));
    assert!(!text.contains("panicked"));

    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["error"], "Internal server error");
    assert!(body.get("version").is_none());
}

#[tokio::test]
async fn landing_page_renders_full_document() {
    let server = server_with(&["--environment", "production"]);

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"lang="de""#));
    assert!(html.contains(r#"href="https://scriptony.com/""#));
    assert!(html.contains("Alles was du brauchst, an einem Ort"));
    assert!(html.contains(r#"id="toaster""#));
    assert!(!html.contains("(Dev)"));
}

#[tokio::test]
async fn development_builds_show_badge() {
    let server = server_with(&["--environment", "development"]);
    let html = server.get("/").await.text();
    assert!(html.contains("(Dev)"));
}

#[tokio::test]
async fn unknown_routes_get_marketing_404() {
    let server = server_with(&[]);

    let response = server.get("/pricing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("404"));
    assert!(html.contains("Datenschutz"));
    assert!(html.contains(r#"content="noindex, follow""#));
    assert!(!html.contains(r#"rel="canonical""#));
}
