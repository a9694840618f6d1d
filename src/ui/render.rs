//! Server-side rendering entry points.

use leptos::prelude::*;

use crate::ui::context::SiteContext;
use crate::ui::document::RootLayout;
use crate::ui::marketing::{
    LANDING_METADATA, LandingPage, MarketingLayout, NOT_FOUND_METADATA, NotFoundPage,
};
use crate::ui::metadata::PageMetadata;

/// Render a full document: root layout, marketing layout, then `content`.
fn render_marketing_page<F, V>(site: &SiteContext, page: PageMetadata, content: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let site = site.clone();
    let owner = Owner::new();
    owner.with(move || {
        provide_context(site);
        view! {
            <RootLayout page=page>
                <MarketingLayout>{content()}</MarketingLayout>
            </RootLayout>
        }
        .to_html()
    })
}

/// HTML for `/`.
pub fn render_landing_page(site: &SiteContext) -> String {
    render_marketing_page(site, LANDING_METADATA, || view! { <LandingPage /> })
}

/// HTML for any unknown route.
pub fn render_not_found_page(site: &SiteContext) -> String {
    render_marketing_page(site, NOT_FOUND_METADATA, || view! { <NotFoundPage /> })
}

/// Render a view in a fresh reactive owner with default context.
#[cfg(test)]
pub(crate) fn render_fragment<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

/// Like [`render_fragment`], with `site` provided as context.
#[cfg(test)]
pub(crate) fn render_with_site<F, V>(site: SiteContext, build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_context(site);
        build().to_html()
    })
}
