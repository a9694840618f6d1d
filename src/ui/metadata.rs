//! Static site metadata and its `<head>` rendering.

use leptos::prelude::*;

/// Site name used for titles and social cards.
pub const SITE_NAME: &str = "Scriptony";

const SITE_DESCRIPTION: &str = "Web-Anwendung für Drehbuchautoren und Worldbuilding";

/// Open Graph card (`og:*` properties).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    /// `og:type`, e.g. `website`.
    pub kind: &'static str,
    /// `og:locale`, e.g. `de_DE`.
    pub locale: &'static str,
    /// Absolute URL of the site.
    pub url: String,
    pub title: &'static str,
    pub description: &'static str,
    pub site_name: &'static str,
}

/// Twitter card (`twitter:*` names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    /// Card layout, e.g. `summary_large_image`.
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Handle of the account credited for the content.
    pub creator: &'static str,
}

/// Crawler directives. `-1` means "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    /// Allow the page to appear in search results.
    pub index: bool,
    /// Allow crawlers to follow links on the page.
    pub follow: bool,
    pub max_video_preview: i32,
    pub max_image_preview: &'static str,
    pub max_snippet: i32,
}

impl Robots {
    /// Value of `<meta name="robots">`.
    pub fn directive(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }

    /// Value of `<meta name="googlebot">`.
    pub fn googlebot_directive(&self) -> String {
        format!(
            "{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            self.directive(),
            self.max_video_preview,
            self.max_image_preview,
            self.max_snippet
        )
    }
}

/// Favicon paths, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    /// Browser tab icon.
    pub icon: &'static str,
    /// iOS home-screen icon.
    pub apple: &'static str,
}

/// Site-wide metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub default_title: &'static str,
    /// `%s` is replaced with the page title.
    pub title_template: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub creator: &'static str,
    /// Absolute origin without a trailing slash.
    pub base_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub icons: Icons,
    pub manifest: &'static str,
}

impl SiteMetadata {
    pub fn scriptony(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            default_title: SITE_NAME,
            title_template: "%s | Scriptony",
            description: SITE_DESCRIPTION,
            keywords: &["Drehbuch", "Worldbuilding", "Scriptwriting", "Creative Writing"],
            author: "Scriptony Team",
            creator: SITE_NAME,
            open_graph: OpenGraph {
                kind: "website",
                locale: "de_DE",
                url: base_url.clone(),
                title: SITE_NAME,
                description: SITE_DESCRIPTION,
                site_name: SITE_NAME,
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: SITE_NAME,
                description: SITE_DESCRIPTION,
                creator: "@scriptony",
            },
            robots: Robots {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            },
            icons: Icons {
                icon: "/favicon.ico",
                apple: "/apple-touch-icon.png",
            },
            manifest: "/site.webmanifest",
            base_url,
        }
    }

    /// Document title for a page. Pages without their own title get the
    /// site default; others are run through the template.
    pub fn resolve_title(&self, page_title: Option<&str>) -> String {
        match page_title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => self.title_template.replace("%s", title),
            None => self.default_title.to_string(),
        }
    }

    /// Absolute URL for a route path.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            format!("{}/", self.base_url)
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self::scriptony("https://scriptony.com")
    }
}

/// Metadata a page declares about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Page title, run through the site title template. `None` uses the site name.
    pub title: Option<&'static str>,
    /// Overrides the site description when set.
    pub description: Option<&'static str>,
    /// Route path for the canonical link. `None` omits the link.
    pub path: Option<&'static str>,
    /// Ask crawlers not to index the page.
    pub noindex: bool,
}

/// `<head>` tags for one page.
#[component]
pub fn HeadTags(site: SiteMetadata, page: PageMetadata) -> impl IntoView {
    let title = site.resolve_title(page.title);
    let description = page.description.unwrap_or(site.description);
    let canonical = page.path.map(|path| site.absolute_url(path));
    let keywords = site.keywords.join(",");
    let crawler = Robots {
        index: site.robots.index && !page.noindex,
        ..site.robots
    };
    let robots = crawler.directive();
    let googlebot = crawler.googlebot_directive();
    let og = site.open_graph;
    let twitter = site.twitter;

    let social = view! {
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:type")} content=og.kind />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:locale")} content=og.locale />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:url")} content=og.url />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:title")} content=og.title />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:description")} content=og.description />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:site_name")} content=og.site_name />

        <meta name="twitter:card" content=twitter.card />
        <meta name="twitter:title" content=twitter.title />
        <meta name="twitter:description" content=twitter.description />
        <meta name="twitter:creator" content=twitter.creator />
    };

    view! {
        <title>{title}</title>
        <meta name="description" content=description />
        <meta name="keywords" content=keywords />
        <meta name="author" content=site.author />
        <meta name="creator" content=site.creator />
        <meta name="robots" content=robots />
        <meta name="googlebot" content=googlebot />
        {canonical.map(|href| view! { <link rel="canonical" href=href /> })}
        {social}
        <link rel="icon" href=site.icons.icon />
        <link rel="apple-touch-icon" href=site.icons.apple />
        <link rel="manifest" href=site.manifest />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::render_fragment;

    #[test]
    fn title_defaults_to_site_name() {
        let site = SiteMetadata::default();
        assert_eq!(site.resolve_title(None), "Scriptony");
        assert_eq!(site.resolve_title(Some("  ")), "Scriptony");
    }

    #[test]
    fn page_title_goes_through_template() {
        let site = SiteMetadata::default();
        assert_eq!(site.resolve_title(Some("Preise")), "Preise | Scriptony");
    }

    #[test]
    fn robots_directives_match_crawler_syntax() {
        let robots = SiteMetadata::default().robots;
        assert_eq!(robots.directive(), "index, follow");
        assert_eq!(
            robots.googlebot_directive(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let site = SiteMetadata::scriptony("https://staging.scriptony.com/");
        assert_eq!(site.base_url, "https://staging.scriptony.com");
        assert_eq!(site.absolute_url("/"), "https://staging.scriptony.com/");
        assert_eq!(
            site.absolute_url("/pricing"),
            "https://staging.scriptony.com/pricing"
        );
    }

    #[test]
    fn head_tags_render_social_cards() {
        let html = render_fragment(|| {
            view! { <HeadTags site=SiteMetadata::default() page=PageMetadata::default() /> }
        });
        assert!(html.contains("<title>Scriptony</title>"));
        assert!(html.contains(r#"content="summary_large_image""#));
        assert!(html.contains(r#"content="de_DE""#));
        assert!(html.contains(r#"content="@scriptony""#));
        assert!(html.contains(r#"href="/site.webmanifest""#));
        assert!(html.contains(r#"content="Drehbuch,Worldbuilding,Scriptwriting,Creative Writing""#));
    }

    #[test]
    fn page_description_overrides_site_description() {
        let page = PageMetadata {
            title: Some("Preise"),
            description: Some("Pläne für jedes Team"),
            path: Some("/pricing"),
            noindex: false,
        };
        let html = render_fragment(move || {
            view! { <HeadTags site=SiteMetadata::default() page=page /> }
        });
        assert!(html.contains("<title>Preise | Scriptony</title>"));
        assert!(html.contains(r#"name="description" content="Pläne für jedes Team""#));
        assert!(html.contains(r#"href="https://scriptony.com/pricing""#));
    }

    #[test]
    fn noindex_page_has_no_canonical_link() {
        let page = PageMetadata {
            title: Some("Seite nicht gefunden"),
            noindex: true,
            ..PageMetadata::default()
        };
        let html = render_fragment(move || {
            view! { <HeadTags site=SiteMetadata::default() page=page /> }
        });
        assert!(!html.contains(r#"rel="canonical""#));
        assert!(html.contains(r#"name="robots" content="noindex, follow""#));
        assert!(html.contains(r#"content="noindex, follow, max-video-preview:-1"#));
    }
}
