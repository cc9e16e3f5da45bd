//! # vinted-landing
//!
//! Leptos SSR renderer for the Vinted Optimizer landing page.
//!
//! The page is static: a heading, a tagline, a three-card feature grid and
//! one link to the dashboard route. It is rendered to a complete HTML
//! document with no hydration and no client-side JavaScript.
//!
//! ## Quick Start
//!
//! ```rust
//! use vinted_landing::render_landing;
//!
//! let html = render_landing();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Vinted Optimizer"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Page copy ([`types::LandingContent`], [`types::Feature`])
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait; no reactive
//! runtime is needed:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <LandingDocument content=content /> }.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::LandingContent;

/// Render the landing page with the product copy.
///
/// Parameterless and deterministic: every call returns the same document.
///
/// # Example
///
/// ```rust
/// let first = vinted_landing::render_landing();
/// let second = vinted_landing::render_landing();
/// assert_eq!(first, second);
/// ```
pub fn render_landing() -> String {
    render_landing_with(&LandingContent::default())
}

/// Render the landing page for arbitrary content.
///
/// Returns a complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_landing_with(content: &LandingContent) -> String {
    let doc = view! {
        <LandingDocument content=content.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
