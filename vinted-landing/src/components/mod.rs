//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingView
//!     ├── <h1> title + tagline
//!     ├── FeatureGrid
//!     │   └── FeatureCard (per feature)
//!     └── DashboardLink
//! ```
//!
//! Components are normally used via [`crate::render_landing`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use vinted_landing::components::FeatureGrid;
//! use vinted_landing::types::LandingContent;
//!
//! view! { <FeatureGrid features=LandingContent::default().features /> }
//! ```

mod document;
mod features;
mod landing_view;
mod link;

pub use document::LandingDocument;
pub use features::{FeatureCard, FeatureGrid};
pub use landing_view::LandingView;
pub use link::DashboardLink;
