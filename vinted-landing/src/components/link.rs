//! Call-to-action link to the dashboard route.
//!
//! A plain anchor: navigation is left to the browser and whatever serves
//! the target path.

use leptos::prelude::*;

/// Primary button-styled link.
#[component]
pub fn DashboardLink(
    /// Navigation target (normally [`crate::types::DASHBOARD_ROUTE`])
    href: String,
    /// Visible label
    label: String,
) -> impl IntoView {
    view! {
        <a href=href class="btn-primary">{label}</a>
    }
}
