//! Theme context: light/dark/system display modes.
//!
//! The server emits the configured default as a class on `<html>` and a small
//! bootstrap script that swaps in the visitor's persisted choice before first
//! paint. The toggle button cycles through the modes client-side.

use std::fmt;

use leptos::prelude::*;
use serde::Deserialize;

use crate::ui::components::{ButtonSize, ButtonVariant, MoonIcon, SunIcon};
use crate::ui::context::use_site;

/// Display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow `prefers-color-scheme`.
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Mode selected after this one when the toggle is pressed.
    pub fn next(self, enable_system: bool) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark if enable_system => Self::System,
            Self::Dark | Self::System => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    pub default_mode: ThemeMode,
    pub enable_system: bool,
    /// `localStorage` key holding the visitor's choice.
    pub storage_key: &'static str,
    /// Suppress CSS transitions while the class is swapped.
    pub disable_transition_on_change: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::Light,
            enable_system: true,
            storage_key: "theme",
            disable_transition_on_change: true,
        }
    }
}

impl ThemeSettings {
    /// Class set on `<html>` before any script runs. `System` has no static
    /// answer, so it is left to the bootstrap script.
    pub fn initial_class(&self) -> Option<&'static str> {
        match self.default_mode {
            ThemeMode::System => None,
            mode => Some(mode.as_str()),
        }
    }

    /// Modes the toggle cycles through, starting at light.
    pub fn cycle(&self) -> Vec<ThemeMode> {
        let mut modes = vec![ThemeMode::Light];
        let mut mode = ThemeMode::Light.next(self.enable_system);
        while mode != ThemeMode::Light {
            modes.push(mode);
            mode = mode.next(self.enable_system);
        }
        modes
    }

    /// Inline script that applies the persisted mode and wires the toggle.
    pub fn bootstrap_script(&self) -> String {
        let cycle = self
            .cycle()
            .iter()
            .map(|mode| format!("\"{mode}\""))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            r#"(function(){{var k="{key}",d="{default}",c=[{cycle}],sys={system},nt={no_transition};
var root=document.documentElement;
function resolve(m){{return m==="system"?(matchMedia("(prefers-color-scheme: dark)").matches?"dark":"light"):m;}}
function apply(m){{var s;if(nt){{s=document.createElement("style");s.textContent="*{{transition:none!important}}";document.head.appendChild(s);}}
root.classList.remove("light","dark");root.classList.add(resolve(m));root.dataset.theme=m;
if(s){{getComputedStyle(document.body||root);setTimeout(function(){{s.remove();}},1);}}}}
var m;try{{m=localStorage.getItem(k);}}catch(e){{}}
if(c.indexOf(m)<0)m=d;apply(m);
if(sys)matchMedia("(prefers-color-scheme: dark)").addEventListener("change",function(){{if(root.dataset.theme==="system")apply("system");}});
document.addEventListener("click",function(ev){{var t=ev.target.closest&&ev.target.closest("[data-theme-toggle]");if(!t)return;
var n=c[(c.indexOf(root.dataset.theme)+1)%c.length];try{{localStorage.setItem(k,n);}}catch(e){{}}apply(n);}});}})();"#,
            key = self.storage_key,
            default = self.default_mode,
            cycle = cycle,
            system = self.enable_system,
            no_transition = self.disable_transition_on_change,
        )
    }
}

/// Button that cycles the display mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_site().theme;
    let classes = format!(
        "inline-flex items-center justify-center rounded-md {} {}",
        ButtonVariant::Ghost.classes(),
        ButtonSize::Icon.classes()
    );

    view! {
        <button
            type="button"
            class=classes
            data-theme-toggle=""
            data-default-mode=theme.default_mode.as_str()
            aria-label="Farbschema wechseln"
        >
            <SunIcon class="h-5 w-5 rotate-0 scale-100 transition-all dark:-rotate-90 dark:scale-0" />
            <MoonIcon class="absolute h-5 w-5 rotate-90 scale-0 transition-all dark:rotate-0 dark:scale-100" />
            <span class="sr-only">"Farbschema wechseln"</span>
        </button>
    }
}
