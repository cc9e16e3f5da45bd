//! Rendered-output checks for the default landing page.

use pretty_assertions::assert_eq;
use vinted_landing::render_landing;
use vinted_landing::types::DASHBOARD_ROUTE;

#[test]
fn has_exactly_one_top_level_heading() {
    let html = render_landing();

    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains(">Vinted Optimizer</h1>"));
}

#[test]
fn shows_tagline() {
    let html = render_landing();

    assert!(html.contains("Ottimizza le tue vendite su Vinted con"));
    assert!(html.contains("intelligenza artificiale"));
}

#[test]
fn has_exactly_three_feature_cards() {
    let html = render_landing();

    assert_eq!(html.matches("class=\"feature-card\"").count(), 3);
    assert_eq!(html.matches("<h2").count(), 3);
    assert!(html.contains("📸 Analisi AI"));
    assert!(html.contains("📊 Dashboard"));
    assert!(html.contains("🚚 Spedizioni"));
    assert!(html.contains(
        "Analisi automatica delle immagini per identificare prodotti e suggerire prezzi ottimali"
    ));
    assert!(html.contains("Gestione centralizzata delle vendite per te e la tua famiglia"));
    assert!(html.contains("Integrazione multi-corriere con tracking automatico"));
}

#[test]
fn feature_cards_keep_their_order() {
    let html = render_landing();

    let ai = html.find("📸 Analisi AI").unwrap();
    let dashboard = html.find("📊 Dashboard").unwrap();
    let shipping = html.find("🚚 Spedizioni").unwrap();
    assert!(ai < dashboard && dashboard < shipping);
}

#[test]
fn has_exactly_one_link_to_dashboard() {
    let html = render_landing();

    assert_eq!(html.matches("<a ").count(), 1);
    assert_eq!(DASHBOARD_ROUTE, "/dashboard");
    assert!(html.contains("href=\"/dashboard\""));
    assert!(html.contains("Accedi alla Dashboard</a>"));
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render_landing(), render_landing());
}
