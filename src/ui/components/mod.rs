//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI components inspired by
//! shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`LinkButton`]: Anchor styled as a button
//! - [`Card`], [`CardHeader`], [`CardTitle`], [`CardDescription`]: Card container
//! - [`Logo`]: Scriptony logo in three sizes
//! - [`icons`]: SVG icon components

mod button;
mod card;
mod icons;
mod logo;

pub use button::{ButtonSize, ButtonVariant, LinkButton};
pub use card::{Card, CardDescription, CardHeader, CardTitle};
pub use icons::*;
pub use logo::{LOGO_SRC, Logo, LogoSize};
