//! Scriptony marketing site
//!
//! Server-rendered landing page and liveness probe for the Scriptony
//! screenwriting and worldbuilding product.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server with tracing and request timeouts
//! - **UI**: Leptos SSR components rendered to HTML strings per request
//! - **Health**: `/api/health` liveness probe for process supervisors
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`health`]: Liveness probe
//! - [`server`]: Router and server lifecycle
//! - [`ui`]: Layouts, pages and components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod health;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::health::ReleaseSource;
use crate::ui::context::SiteContext;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Render context handed to every page.
    pub site: SiteContext,
    /// Release information reported by the liveness probe.
    pub release: Arc<dyn ReleaseSource>,
}
