use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Directive used when neither `RUST_LOG` nor `logging.filter` is set.
const DEFAULT_FILTER: &str = "info,scriptony_web=debug";

/// Initialize structured logging (M-LOG-STRUCTURED).
///
/// `RUST_LOG` wins over the configured filter so operators can raise
/// verbosity without editing config files.
pub fn init(logging: &LoggingConfig) {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(logging.filter.as_deref().unwrap_or(DEFAULT_FILTER))
    });

    let registry = tracing_subscriber::registry().with(filter_layer);

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_current_span(false))
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .compact(),
            )
            .init(),
    }
}
