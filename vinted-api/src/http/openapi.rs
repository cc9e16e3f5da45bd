//! OpenAPI document for the routes this service exposes.
//!
//! Only mounted when `debug` is enabled. The document is built from
//! [`ROUTES`], so adding a route means adding a row there.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Map, Value, json};

use super::AppState;
use crate::config::Settings;

/// One documented operation.
#[derive(Debug, Clone, Copy)]
pub struct RouteDoc {
    pub path: &'static str,
    pub method: &'static str,
    pub summary: &'static str,
    pub tag: &'static str,
    pub content_type: &'static str,
}

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        path: "/",
        method: "get",
        summary: "Landing page",
        tag: "Landing",
        content_type: "text/html",
    },
    RouteDoc {
        path: "/api/health",
        method: "get",
        summary: "Health check for monitoring and load balancers",
        tag: "Health",
        content_type: "application/json",
    },
    RouteDoc {
        path: "/api/ready",
        method: "get",
        summary: "Readiness check of database and redis",
        tag: "Health",
        content_type: "application/json",
    },
    RouteDoc {
        path: "/api/v1/health",
        method: "get",
        summary: "Basic health check",
        tag: "Health",
        content_type: "application/json",
    },
];

/// Build the OpenAPI 3.1 document.
pub fn document(settings: &Settings) -> Value {
    let mut paths = Map::new();
    for route in ROUTES {
        let entry = paths
            .entry(route.path)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(ops) = entry {
            ops.insert(
                route.method.to_string(),
                json!({
                    "summary": route.summary,
                    "tags": [route.tag],
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": { route.content_type: {} }
                        }
                    }
                }),
            );
        }
    }

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": settings.app_name,
            "description": "Enterprise API for Vinted sales optimization",
            "version": settings.version,
        },
        "paths": paths,
    })
}

pub(super) async fn openapi_document(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(document(&state.settings))
}
