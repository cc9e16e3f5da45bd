//! HTTP surface: router, shared state and middleware.
//!
//! ```text
//! GET /                   landing page (HTML)
//! GET /api/health         liveness + version
//! GET /api/ready          readiness of database and redis
//! GET /api/v1/health      versioned liveness
//! GET /api/openapi.json   route document (debug only)
//! *                       404 {"detail":"Not Found"}
//! ```

mod health;
mod landing;
pub mod openapi;

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::Settings;
use crate::probes::{self, Probe};

/// State shared by every handler.
pub struct AppState {
    pub settings: Settings,
    /// Landing page, rendered once at startup
    pub landing_html: String,
    pub probes: Vec<Arc<dyn Probe>>,
}

impl AppState {
    /// State with TCP probes derived from the settings.
    pub fn new(settings: Settings) -> Self {
        let probes = probes::from_settings(&settings);
        Self::with_probes(settings, probes)
    }

    pub fn with_probes(settings: Settings, probes: Vec<Arc<dyn Probe>>) -> Self {
        Self {
            settings,
            landing_html: vinted_landing::render_landing(),
            probes,
        }
    }
}

/// Build the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.settings.cors_allowed_origins);

    let mut api = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/ready", get(health::readiness_check))
        .nest("/api/v1", v1_router());

    if state.settings.debug {
        api = api.route("/api/openapi.json", get(openapi::openapi_document));
    }

    Router::new()
        .route("/", get(landing::landing_page))
        .merge(api)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn v1_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health::v1_health))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

/// CORS for the configured origins: credentials allowed, methods and
/// headers mirrored from the preflight request.
///
/// A `*` entry allows every origin. Credentials forbid a literal `*` in the
/// response, so the request origin is echoed back instead.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(listed_origins(origins))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

fn listed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring CORS origin that is not a valid header value");
                None
            }
        })
        .collect()
}
