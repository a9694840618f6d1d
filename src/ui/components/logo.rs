//! Scriptony logo: image plus optional wordmark.

use leptos::prelude::*;

/// Logo image asset.
pub const LOGO_SRC: &str = "/scriptony-logo.png";

const LOGO_ALT: &str = "Scriptony Logo";

/// Logo size token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    /// Width and height of the image, in CSS pixels.
    #[must_use]
    pub fn image_px(self) -> u32 {
        match self {
            Self::Small => 24,
            Self::Medium => 32,
            Self::Large => 48,
        }
    }

    /// Classes applied to the wordmark.
    #[must_use]
    pub fn text_classes(self) -> &'static str {
        match self {
            Self::Small => "text-lg font-semibold",
            Self::Medium => "text-xl font-semibold",
            Self::Large => "text-2xl font-bold",
        }
    }

    /// Spacing between image and wordmark.
    #[must_use]
    pub fn gap_class(self) -> &'static str {
        match self {
            Self::Small | Self::Medium => "gap-2",
            Self::Large => "gap-3",
        }
    }
}

/// Scriptony logo.
///
/// With `href` set the whole unit is a single link; otherwise it is inert.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Logo href=Some("/") size=LogoSize::Medium /> }
/// ```
#[component]
pub fn Logo(
    #[prop(default = LogoSize::Medium)] size: LogoSize,
    /// Show the "Scriptony" wordmark next to the image.
    #[prop(default = true)]
    show_text: bool,
    /// Navigation target.
    #[prop(default = None)]
    href: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Small muted suffix after the wordmark, e.g. `Dev`.
    #[prop(default = None)]
    badge: Option<String>,
) -> impl IntoView {
    let classes = format!(
        "flex items-center {} transition-opacity hover:opacity-80 {}",
        size.gap_class(),
        class
    );
    let px = size.image_px().to_string();
    let text_classes = format!("{} text-foreground", size.text_classes());

    let wordmark = show_text.then(|| {
        let badge = badge.map(|label| {
            view! {
                <span class="ml-1 text-xs text-muted-foreground font-normal">
                    {format!("({label})")}
                </span>
            }
        });

        view! {
            <span class=text_classes>
                "Scriptony"
                {badge}
            </span>
        }
    });

    let content = view! {
        <div class=classes data-logo-size=size_name(size)>
            <img src=LOGO_SRC alt=LOGO_ALT width=px.clone() height=px class="h-auto w-auto" />
            {wordmark}
        </div>
    };

    match href {
        Some(href) => view! { <a href=href class="block">{content}</a> }.into_any(),
        None => content.into_any(),
    }
}

fn size_name(size: LogoSize) -> &'static str {
    match size {
        LogoSize::Small => "sm",
        LogoSize::Medium => "md",
        LogoSize::Large => "lg",
    }
}
