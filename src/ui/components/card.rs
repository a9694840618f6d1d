//! Card component with header, title and description.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader>
///             <CardTitle>"Worldbuilding"</CardTitle>
///             <CardDescription>"Erschaffe komplexe Welten."</CardDescription>
///         </CardHeader>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-lg border bg-card text-card-foreground shadow-sm {}",
        class
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex flex-col space-y-1.5 p-6 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-semibold leading-none tracking-tight">
            {children()}
        </h3>
    }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! {
        <p class="text-sm text-muted-foreground">
            {children()}
        </p>
    }
}
