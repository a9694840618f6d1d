//! Global toast-notification host.
//!
//! One live region is mounted at the document root. Anything on the page
//! shows a message through `window.scriptonyToast(message, kind)`.

use leptos::prelude::*;

use crate::ui::context::use_site;

/// Screen corner the toasts stack in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
    #[default]
    BottomRight,
    BottomCenter,
}

impl ToastPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomCenter => "bottom-center",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::TopRight => "top-0 right-0",
            Self::BottomRight => "bottom-0 right-0",
            Self::BottomCenter => "bottom-0 left-1/2 -translate-x-1/2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToasterSettings {
    pub position: ToastPosition,
    /// Milliseconds a toast stays visible.
    pub duration_ms: u32,
    /// Maximum toasts shown at once; older ones are dropped.
    pub visible_toasts: u32,
}

impl Default for ToasterSettings {
    fn default() -> Self {
        Self {
            position: ToastPosition::BottomRight,
            duration_ms: 4000,
            visible_toasts: 3,
        }
    }
}

impl ToasterSettings {
    fn script(&self) -> String {
        format!(
            r#"(function(){{var host=document.getElementById("toaster");if(!host)return;
var list=host.querySelector("ol");
window.scriptonyToast=function(message,kind){{var li=document.createElement("li");
li.dataset.kind=kind||"default";li.setAttribute("role","status");
li.className="pointer-events-auto rounded-md border bg-background px-4 py-3 text-sm shadow-lg";
li.textContent=String(message);list.appendChild(li);
while(list.children.length>{max})list.removeChild(list.firstElementChild);
setTimeout(function(){{li.remove();}},{duration});}};}})();"#,
            max = self.visible_toasts,
            duration = self.duration_ms,
        )
    }
}

/// Toast mount point. Rendered once, after the page content.
#[component]
pub fn Toaster() -> impl IntoView {
    let settings = use_site().toaster;
    let classes = format!(
        "pointer-events-none fixed z-[100] flex max-h-screen w-full flex-col gap-2 p-4 sm:max-w-[420px] {}",
        settings.position.classes()
    );
    let script = settings.script();

    view! {
        <section
            id="toaster"
            aria-label="Benachrichtigungen"
            aria-live="polite"
            data-position=settings.position.as_str()
            class=classes
        >
            <ol class="flex flex-col gap-2"></ol>
        </section>
        <script inner_html=script></script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::render_fragment;

    #[test]
    fn host_is_a_polite_live_region() {
        let html = render_fragment(|| view! { <Toaster /> });
        assert!(html.contains(r#"id="toaster""#));
        assert!(html.contains(r#"aria-live="polite""#));
        assert!(html.contains(r#"data-position="bottom-right""#));
    }

    #[test]
    fn script_exposes_global_call() {
        let html = render_fragment(|| view! { <Toaster /> });
        assert!(html.contains("window.scriptonyToast"));
        assert!(html.contains("list.children.length>3"));
    }
}
