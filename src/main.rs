//! Scriptony marketing site server.
//!
//! Entry point: loads configuration, installs logging, serves HTTP.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use scriptony_web::{config::AppConfig, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    telemetry::init(&config.logging);

    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        base_url = %config.site.base_url,
        theme = %config.theme.default_mode,
        "Configuration loaded"
    );

    server::start_server(config).await
}
