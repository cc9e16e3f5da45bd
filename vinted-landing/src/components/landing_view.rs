//! Landing view - heading, tagline, feature grid and call to action.

use leptos::prelude::*;

use super::{DashboardLink, FeatureGrid};
use crate::types::LandingContent;

/// Body of the landing page.
#[component]
pub fn LandingView(
    /// Copy displayed by the view
    content: LandingContent,
) -> impl IntoView {
    view! {
        <main class="landing">
            <div class="landing-inner">
                <h1 class="landing-title">{content.title}</h1>
                <p class="landing-tagline muted">{content.tagline}</p>
                <FeatureGrid features=content.features />
                <div class="cta">
                    <DashboardLink href=content.dashboard_href label=content.dashboard_label />
                </div>
            </div>
        </main>
    }
}
