//! Button-styled navigation links.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary call to action.
    #[default]
    Primary,
    /// Bordered, transparent background.
    Outline,
    /// No chrome until hovered.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact, used in the header.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Hero and call-to-action sections.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-9 rounded-md px-3",
            Self::Md => "h-10 px-4 py-2",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Anchor rendered with button styling.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <LinkButton href="/auth/signup" size=ButtonSize::Lg>
///         "Kostenlos starten"
///     </LinkButton>
/// }
/// ```
#[component]
pub fn LinkButton(
    /// Navigation target.
    href: &'static str,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Link label.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center whitespace-nowrap rounded-md \
                        text-sm font-medium transition-colors focus-visible:outline-none \
                        focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    view! {
        <a href=href class=classes data-variant=variant_name(variant)>
            {children()}
        </a>
    }
}

fn variant_name(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "primary",
        ButtonVariant::Outline => "outline",
        ButtonVariant::Ghost => "ghost",
    }
}
