//! Site-wide render context.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::ui::metadata::SiteMetadata;
use crate::ui::theme::ThemeSettings;
use crate::ui::toast::ToasterSettings;

/// Immutable values every page render needs, built once at startup and
/// provided at the document root.
#[derive(Debug, Clone, Default)]
pub struct SiteContext {
    pub metadata: Arc<SiteMetadata>,
    pub theme: ThemeSettings,
    pub toaster: ToasterSettings,
    /// Suffix shown next to the logo label, e.g. `Dev`.
    pub logo_badge: Option<String>,
}

impl SiteContext {
    pub fn from_config(config: &AppConfig) -> Self {
        let environment = config.app.environment_or_default();

        Self {
            metadata: Arc::new(SiteMetadata::scriptony(&config.site.base_url)),
            theme: ThemeSettings {
                default_mode: config.theme.default_mode,
                enable_system: config.theme.enable_system,
                ..ThemeSettings::default()
            },
            toaster: ToasterSettings::default(),
            logo_badge: config.site.logo_badge(&environment),
        }
    }
}

/// The current [`SiteContext`], or the defaults when rendered outside a page.
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_default()
}
