//! Fallback page for unknown routes.

use leptos::prelude::*;

use crate::ui::components::{ButtonSize, LinkButton};
use crate::ui::metadata::PageMetadata;

/// Not indexed and without a canonical link, since the page is served for any unknown path.
pub const NOT_FOUND_METADATA: PageMetadata = PageMetadata {
    title: Some("Seite nicht gefunden"),
    description: None,
    path: None,
    noindex: true,
};

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="flex flex-col items-center justify-center py-20 text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-muted-foreground mb-6">"Diese Seite gibt es leider nicht."</p>
            <LinkButton href="/" size=ButtonSize::Lg>
                "Zur Startseite"
            </LinkButton>
        </section>
    }
}
