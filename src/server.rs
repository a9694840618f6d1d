use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::health::{self, ReleaseInfo, StaticRelease};
use crate::ui::context::SiteContext;
use crate::ui::render::{render_landing_page, render_not_found_page};

/// Files served from the static directory root rather than `/static`.
const ROOT_ASSETS: [&str; 4] = [
    "scriptony-logo.png",
    "favicon.ico",
    "apple-touch-icon.png",
    "site.webmanifest",
];

impl AppState {
    /// Production state: release info and site context resolved from config.
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let release = ReleaseInfo::from_config(&config.app);
        Self {
            site: SiteContext::from_config(&config),
            release: Arc::new(StaticRelease::new(release)),
            config,
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.site.static_dir.clone();
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);

    let mut app = Router::new()
        .route("/", get(landing_handler))
        .route("/api/health", get(health::health))
        .nest_service("/static", ServeDir::new(&static_dir));

    for asset in ROOT_ASSETS {
        app = app.route_service(&format!("/{asset}"), ServeFile::new(static_dir.join(asset)));
    }

    app.fallback(not_found_handler)
        .layer(axum::middleware::from_fn_with_state(
            timeout_duration,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer 408 when the inner handler runs longer than `timeout`.
pub async fn request_timeout(
    State(timeout): State<Duration>,
    req: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(res) => res,
        Err(_) => {
            warn!(name: "request.timeout", timeout_secs = timeout.as_secs_f64(), "Request timed out");
            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
        }
    }
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::from_config(Arc::clone(&config));

    info!(
        name: "release.resolved",
        version = %config.app.version_or_default(),
        environment = %config.app.environment_or_default(),
        "Release information resolved"
    );

    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        static_dir = %config.site.static_dir.display(),
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!(name: "server.shutdown", "Shutdown signal received");
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn landing_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_landing_page(&state.site))
}

/// Any unknown route - 404 page inside the marketing layout.
async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render_not_found_page(&state.site)))
}
