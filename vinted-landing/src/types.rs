//! Content types for the landing page.
//!
//! The landing page carries no runtime data: [`LandingContent::default`]
//! is the product copy, and the render path accepts any other
//! `LandingContent` so the same components can be exercised in tests.
//!
//! # Example
//!
//! ```rust
//! use vinted_landing::types::{Feature, LandingContent};
//!
//! let content = LandingContent {
//!     features: vec![Feature::new("🔎 Ricerca", "Ricerca avanzata degli annunci")],
//!     ..Default::default()
//! };
//! assert_eq!(content.title, "Vinted Optimizer");
//! ```

/// Path of the dashboard route the landing page links to.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// One card of the feature grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Card heading, emoji included (e.g. `"📸 Analisi AI"`)
    pub title: String,
    /// One-paragraph description shown under the heading
    pub description: String,
}

impl Feature {
    /// Build a feature card from its title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Everything the landing view displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingContent {
    /// Page heading, also used as the document `<title>`
    pub title: String,
    /// Muted line below the heading
    pub tagline: String,
    /// Cards of the feature grid, rendered in order
    pub features: Vec<Feature>,
    /// Target of the call-to-action link
    pub dashboard_href: String,
    /// Visible label of the call-to-action link
    pub dashboard_label: String,
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            title: "Vinted Optimizer".into(),
            tagline: "Ottimizza le tue vendite su Vinted con l'intelligenza artificiale".into(),
            features: vec![
                Feature::new(
                    "📸 Analisi AI",
                    "Analisi automatica delle immagini per identificare prodotti e suggerire prezzi ottimali",
                ),
                Feature::new(
                    "📊 Dashboard",
                    "Gestione centralizzata delle vendite per te e la tua famiglia",
                ),
                Feature::new(
                    "🚚 Spedizioni",
                    "Integrazione multi-corriere con tracking automatico",
                ),
            ],
            dashboard_href: DASHBOARD_ROUTE.into(),
            dashboard_label: "Accedi alla Dashboard".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_has_three_features_in_order() {
        let content = LandingContent::default();
        let titles: Vec<_> = content.features.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["📸 Analisi AI", "📊 Dashboard", "🚚 Spedizioni"]);
    }

    #[test]
    fn default_link_targets_dashboard() {
        let content = LandingContent::default();
        assert_eq!(content.dashboard_href, DASHBOARD_ROUTE);
        assert_eq!(content.dashboard_label, "Accedi alla Dashboard");
    }
}
