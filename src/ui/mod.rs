//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the marketing
//! site, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`document`]: Root layout (language, font, head metadata, providers)
//! - [`marketing`]: Marketing layout and pages
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`render`]: String rendering entry points used by the HTTP handlers

pub mod components;
pub mod context;
pub mod document;
pub mod marketing;
pub mod metadata;
pub mod render;
pub mod theme;
pub mod toast;
