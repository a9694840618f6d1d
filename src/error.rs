//! Error types shared across the crate.

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Command-line arguments were rejected.
    #[error("Invalid arguments: {0}")]
    Cli(String),
}

/// Errors raised while building a health report.
///
/// These never reach the HTTP response body; the handler logs them and
/// answers with the generic unhealthy payload.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    /// The release information source reported a failure.
    #[error("Release information unavailable: {0}")]
    Release(String),

    /// The release information source panicked.
    #[error("Release information source panicked: {0}")]
    Panicked(String),
}
