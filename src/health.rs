//! Liveness probe.
//!
//! `GET /api/health` confirms the process can build and return a response.
//! It performs no dependency checks.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, error};

use crate::AppState;
use crate::config::ReleaseConfig;
use crate::error::HealthError;

/// Body of the `error` field on the failure path.
pub const GENERIC_ERROR: &str = "Internal server error";

/// Probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The process built a response with release information.
    Healthy,
    /// Building the response failed; details are only logged.
    Unhealthy,
}

/// Version and environment the process was deployed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Application version, e.g. `2.0.0`.
    pub version: String,
    /// Deployment environment, e.g. `production`.
    pub environment: String,
}

impl ReleaseInfo {
    /// Resolve from configuration, applying the literal fallbacks.
    pub fn from_config(release: &ReleaseConfig) -> Self {
        Self {
            version: release.version_or_default(),
            environment: release.environment_or_default(),
        }
    }
}

/// Where the probe reads release information from.
pub trait ReleaseSource: Send + Sync + fmt::Debug {
    /// Current release information, or why it is unavailable.
    fn release(&self) -> Result<ReleaseInfo, HealthError>;
}

/// Release information captured once at startup.
#[derive(Debug, Clone)]
pub struct StaticRelease(ReleaseInfo);

impl StaticRelease {
    /// Wrap release information resolved at startup.
    pub fn new(info: ReleaseInfo) -> Self {
        Self(info)
    }
}

impl ReleaseSource for StaticRelease {
    fn release(&self) -> Result<ReleaseInfo, HealthError> {
        Ok(self.0.clone())
    }
}

/// JSON payload returned by the probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    /// ISO-8601 UTC time the report was built.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Always [`GENERIC_ERROR`] when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    /// Build the success payload. Panics in `source` are caught and reported
    /// as [`HealthError::Panicked`].
    pub fn healthy(source: &dyn ReleaseSource) -> Result<Self, HealthError> {
        let release = catch_unwind(AssertUnwindSafe(|| source.release()))
            .map_err(|payload| HealthError::Panicked(panic_message(payload.as_ref())))??;

        Ok(Self {
            status: HealthStatus::Healthy,
            timestamp: now_iso8601(),
            version: Some(release.version),
            environment: Some(release.environment),
            error: None,
        })
    }

    /// The fixed failure payload. Carries no detail about the cause.
    pub fn unhealthy() -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            timestamp: now_iso8601(),
            version: None,
            environment: None,
            error: Some(GENERIC_ERROR.to_string()),
        }
    }
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, report) = match HealthReport::healthy(state.release.as_ref()) {
        Ok(report) => {
            debug!(name: "health.check.ok", "Health check passed");
            (StatusCode::OK, report)
        }
        Err(err) => {
            error!(name: "health.check.failed", error = %err, "Health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, HealthReport::unhealthy())
        }
    };

    (status, [(header::CACHE_CONTROL, "no-store")], Json(report)).into_response()
}

/// UTC timestamp in the `toISOString()` shape, e.g. `2024-05-01T12:00:00.000Z`.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
