//! Layered application configuration.
//!
//! Priority, lowest to highest: built-in defaults, config file, `SCRIPTONY_`
//! environment variables, explicit CLI flags (or their env aliases).

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::AppError;
use crate::ui::theme::ThemeMode;

/// Version reported by the health probe when none is configured.
pub const FALLBACK_VERSION: &str = "2.0.0";

/// Environment name reported by the health probe when none is configured.
pub const FALLBACK_ENVIRONMENT: &str = "development";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Application version reported by /api/health
    #[arg(long, env = "APP_VERSION")]
    pub app_version: Option<String>,

    /// Deployment environment reported by /api/health
    #[arg(long, env = "APP_ENV")]
    pub environment: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub app: ReleaseConfig,
    pub site: SiteConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
}

/// Build/deploy identity surfaced by the liveness probe.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub base_url: String,
    pub static_dir: PathBuf,
    /// Badge appended to the logo label, e.g. `Dev`.
    #[serde(default)]
    pub build_label: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    pub default_mode: ThemeMode,
    pub enable_system: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    #[serde(default)]
    pub filter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| AppError::Cli(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("site.base_url", "https://scriptony.com")?
            .set_default("site.static_dir", "public")?
            .set_default("theme.default_mode", "light")?
            .set_default("theme.enable_system", true)?
            .set_default("logging.format", "pretty")?;

        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. SCRIPTONY_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("SCRIPTONY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(version) = cli.app_version {
            builder = builder.set_override("app.version", version)?;
        }
        if let Some(environment) = cli.environment {
            builder = builder.set_override("app.environment", environment)?;
        }

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ReleaseConfig {
    /// Configured version, or [`FALLBACK_VERSION`] when unset or blank.
    pub fn version_or_default(&self) -> String {
        non_blank(self.version.as_deref()).unwrap_or(FALLBACK_VERSION).to_string()
    }

    /// Configured environment, or [`FALLBACK_ENVIRONMENT`] when unset or blank.
    pub fn environment_or_default(&self) -> String {
        non_blank(self.environment.as_deref())
            .unwrap_or(FALLBACK_ENVIRONMENT)
            .to_string()
    }
}

impl SiteConfig {
    /// Logo badge: the configured label, otherwise `Dev` in the development environment.
    pub fn logo_badge(&self, environment: &str) -> Option<String> {
        match non_blank(self.build_label.as_deref()) {
            Some(label) => Some(label.to_string()),
            None if environment == FALLBACK_ENVIRONMENT => Some("Dev".to_string()),
            None => None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
