//! Outermost document shell.

use leptos::prelude::*;

use crate::ui::context::use_site;
use crate::ui::metadata::{HeadTags, PageMetadata};
use crate::ui::toast::Toaster;

/// Document language.
pub const LANG: &str = "de";

/// Global font (Inter, shipped in `/static/fonts/inter.css`).
const BODY_CLASS: &str = "font-sans antialiased min-h-screen bg-background text-foreground";

/// Root layout: language, font, head metadata, theme bootstrap and the toast
/// host wrapped around every routed page.
#[component]
pub fn RootLayout(
    /// Metadata declared by the routed page.
    page: PageMetadata,
    children: Children,
) -> impl IntoView {
    let site = use_site();
    let html_class = site.theme.initial_class().unwrap_or_default();
    let theme_script = site.theme.bootstrap_script();
    let metadata = site.metadata.as_ref().clone();

    view! {
        <!DOCTYPE html>
        <html lang=LANG class=html_class data-theme=site.theme.default_mode.as_str()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <HeadTags site=metadata page=page />
                <link rel="stylesheet" href="/static/fonts/inter.css" />
                <link rel="stylesheet" href="/static/app.css" />
                <script inner_html=theme_script></script>
            </head>
            <body class=BODY_CLASS>
                {children()}
                <Toaster />
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::SiteContext;
    use crate::ui::render::render_with_site;
    use crate::ui::theme::ThemeMode;

    fn render(site: SiteContext) -> String {
        render_with_site(site, || {
            view! {
                <RootLayout page=PageMetadata::default()>
                    <p id="content">"Inhalt"</p>
                </RootLayout>
            }
        })
    }

    #[test]
    fn sets_language_font_and_default_theme() {
        let html = render(SiteContext::default());
        assert!(html.contains(r#"lang="de""#));
        assert!(html.contains(r#"class="light""#));
        assert!(html.contains("font-sans"));
        assert!(html.contains("/static/fonts/inter.css"));
    }

    #[test]
    fn system_default_leaves_class_to_script() {
        let mut site = SiteContext::default();
        site.theme.default_mode = ThemeMode::System;
        let html = render(site);
        assert!(html.contains(r#"data-theme="system""#));
        assert!(!html.contains(r#"class="light""#));
        assert!(html.contains(r#"d="system""#));
    }

    #[test]
    fn toaster_is_mounted_after_content() {
        let html = render(SiteContext::default());
        let content = html.find(r#"id="content""#).unwrap();
        let toaster = html.find(r#"id="toaster""#).unwrap();
        assert!(toaster > content);
        assert_eq!(html.matches(r#"id="toaster""#).count(), 1);
    }

    #[test]
    fn root_route_title_is_site_name() {
        let html = render(SiteContext::default());
        assert!(html.contains("<title>Scriptony</title>"));
    }
}
