//! Header and footer shared by all public marketing pages.

use leptos::prelude::*;

use crate::ui::components::{ButtonSize, ButtonVariant, LinkButton, Logo, LogoSize};
use crate::ui::context::use_site;
use crate::ui::theme::ThemeToggle;

/// A label/target pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

/// Header navigation.
pub const HEADER_LINKS: [NavLink; 3] = [
    link("Features", "/features"),
    link("Preise", "/pricing"),
    link("Über uns", "/about"),
];

pub const LOGIN_LINK: NavLink = link("Anmelden", "/auth/login");
pub const SIGNUP_LINK: NavLink = link("Registrieren", "/auth/signup");

/// A titled group of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: [NavLink; 3],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Produkt",
        links: [
            link("Features", "/features"),
            link("Preise", "/pricing"),
            link("Roadmap", "/roadmap"),
        ],
    },
    FooterColumn {
        heading: "Support",
        links: [
            link("Dokumentation", "/docs"),
            link("Hilfe", "/help"),
            link("Kontakt", "/contact"),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: [
            link("Datenschutz", "/privacy"),
            link("Nutzungsbedingungen", "/terms"),
            link("Impressum", "/imprint"),
        ],
    },
];

pub const TAGLINE: &str =
    "Die professionelle Lösung für Drehbuchautoren und Worldbuilding-Enthusiasten.";

pub const COPYRIGHT: &str = "© 2024 Scriptony. Alle Rechte vorbehalten.";

/// Layout for public marketing pages (landing page, pricing, ...).
#[component]
pub fn MarketingLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <MarketingHeader />
            <main class="flex-1">{children()}</main>
            <MarketingFooter />
        </div>
    }
}

#[component]
fn MarketingHeader() -> impl IntoView {
    let badge = use_site().logo_badge;

    let nav = HEADER_LINKS
        .iter()
        .map(|item| {
            view! {
                <a
                    href=item.href
                    class="text-sm font-medium text-muted-foreground hover:text-foreground transition-colors"
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <Logo href=Some("/") size=LogoSize::Medium badge=badge />

                <div class="flex items-center gap-4">
                    <nav class="hidden md:flex items-center gap-6" aria-label="Hauptnavigation">
                        {nav}
                    </nav>

                    <div class="flex items-center gap-2">
                        <ThemeToggle />
                        <LinkButton href=LOGIN_LINK.href variant=ButtonVariant::Outline size=ButtonSize::Sm>
                            {LOGIN_LINK.label}
                        </LinkButton>
                        <LinkButton href=SIGNUP_LINK.href size=ButtonSize::Sm>
                            {SIGNUP_LINK.label}
                        </LinkButton>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn MarketingFooter() -> impl IntoView {
    let badge = use_site().logo_badge;

    let columns = FOOTER_COLUMNS
        .iter()
        .map(|column| {
            let links = column
                .links
                .iter()
                .map(|item| {
                    view! {
                        <li>
                            <a href=item.href class="hover:text-foreground transition-colors">
                                {item.label}
                            </a>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="space-y-4" data-footer-column=column.heading>
                    <h4 class="text-sm font-semibold">{column.heading}</h4>
                    <ul class="space-y-2 text-sm text-muted-foreground">{links}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer class="border-t bg-muted/50">
            <div class="container mx-auto px-4 py-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="space-y-4">
                        <Logo size=LogoSize::Small badge=badge />
                        <p class="text-sm text-muted-foreground">{TAGLINE}</p>
                    </div>
                    {columns}
                </div>

                <div class="mt-8 pt-8 border-t text-center text-sm text-muted-foreground">
                    <p>{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::SiteContext;
    use crate::ui::render::{render_fragment, render_with_site};

    fn render_with(content: &'static str) -> String {
        render_fragment(move || {
            view! {
                <MarketingLayout>
                    <p id="page">{content}</p>
                </MarketingLayout>
            }
        })
    }

    #[test]
    fn footer_has_exactly_three_columns_in_order() {
        let html = render_with("Seite");
        assert_eq!(html.matches("data-footer-column=").count(), 3);

        let positions: Vec<usize> = ["Produkt", "Support", "Legal"]
            .iter()
            .map(|heading| html.find(&format!(r#"data-footer-column="{heading}""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn footer_columns_contain_their_links() {
        let html = render_with("Seite");
        let footer = &html[html.find("<footer").unwrap()..];
        for column in FOOTER_COLUMNS {
            assert!(footer.contains(&format!(">{}</h4>", column.heading)));
            for item in column.links {
                assert!(footer.contains(&format!(r#"href="{}""#, item.href)), "{}", item.href);
                assert!(footer.contains(item.label), "{}", item.label);
            }
        }
        assert!(footer.contains(TAGLINE));
        assert!(footer.contains(COPYRIGHT));
    }

    #[test]
    fn footer_is_independent_of_content() {
        let a = render_with("Erste Seite");
        let b = render_with("Zweite Seite");
        let footer = |html: &str| html[html.find("<footer").unwrap()..].to_string();
        assert_eq!(footer(&a), footer(&b));
    }

    #[test]
    fn header_links_home_and_to_auth() {
        let html = render_with("Seite");
        let header = &html[..html.find("</header>").unwrap()];
        assert!(header.contains(r#"<a href="/" class="block">"#));
        for item in HEADER_LINKS {
            assert!(header.contains(&format!(r#"href="{}""#, item.href)));
        }
        assert!(header.contains(r#"href="/auth/login""#));
        assert!(header.contains(r#"href="/auth/signup""#));
        assert!(header.contains("data-theme-toggle"));
    }

    #[test]
    fn content_is_injected_into_main() {
        let html = render_with("Seite");
        let main = html.find("<main").unwrap();
        let page = html.find(r#"id="page""#).unwrap();
        let main_end = html.find("</main>").unwrap();
        assert!(main < page && page < main_end);
    }

    #[test]
    fn logo_badge_comes_from_site_context() {
        let site = SiteContext {
            logo_badge: Some("Dev".into()),
            ..SiteContext::default()
        };
        let html = render_with_site(site, || {
            view! { <MarketingLayout><p>"x"</p></MarketingLayout> }
        });
        assert_eq!(html.matches("(Dev)").count(), 2);

        let without = render_with("x");
        assert!(!without.contains("(Dev)"));
    }
}
