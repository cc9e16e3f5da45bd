//! Feature grid and its cards.

use leptos::prelude::*;

use crate::types::Feature;

/// Responsive grid of feature cards.
#[component]
pub fn FeatureGrid(
    /// Cards to render, in order
    features: Vec<Feature>,
) -> impl IntoView {
    view! {
        <div class="feature-grid">
            {features.into_iter().map(|feature| {
                view! { <FeatureCard feature=feature /> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// A single bordered card: heading plus description.
#[component]
pub fn FeatureCard(
    /// Title and description of the card
    feature: Feature,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h2>{feature.title}</h2>
            <p class="muted">{feature.description}</p>
        </div>
    }
}
