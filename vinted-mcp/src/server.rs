//! MCP tool surface over [`ApiClient`].
//!
//! Tools never fail at the protocol level: transport and decoding problems
//! are reported inside the returned JSON so the agent can read them.

use std::collections::BTreeMap;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ServerInfo;
use rmcp::{ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;

use crate::client::{ApiClient, list_endpoints, query_pairs};

// ============================================================================
// Tool Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiGetParams {
    /// Endpoint path, e.g. /api/v1/listings
    pub path: String,
    /// Optional query parameters
    #[serde(default)]
    pub params: BTreeMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiPostParams {
    /// Endpoint path, e.g. /api/v1/listings
    pub path: String,
    /// JSON request body
    pub body: Value,
}

// ============================================================================
// Server State
// ============================================================================

#[derive(Clone)]
pub struct InspectorServer {
    client: ApiClient,
    /// Tool router (generated by macro)
    tool_router: ToolRouter<Self>,
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Serialization error: {}", e))
}

fn error_json(message: impl std::fmt::Display) -> String {
    pretty(&json!({ "error": message.to_string() }))
}

fn schema_unavailable() -> String {
    pretty(&json!({
        "error": "OpenAPI schema non disponibile",
        "tip": "Avvia API con DEBUG=true"
    }))
}

impl InspectorServer {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    async fn fetch_schema(&self) -> Result<Option<Value>, String> {
        self.client.openapi_schema().await.map_err(|e| {
            warn!("OpenAPI fetch failed: {}", e);
            error_json(e)
        })
    }
}

// ============================================================================
// MCP Tool Implementations
// ============================================================================

#[tool_router]
impl InspectorServer {
    #[tool(
        name = "api_health",
        description = "Controlla lo stato di salute dell'API locale (GET /api/health)"
    )]
    async fn api_health(&self) -> String {
        match self.client.health().await {
            Ok(response) => pretty(&json!({ "status": response.status, "body": response.body })),
            Err(e) => pretty(&json!({
                "error": e.to_string(),
                "api_url": self.client.base_url(),
            })),
        }
    }

    #[tool(
        name = "api_get",
        description = "Esegue GET request all'API con autenticazione"
    )]
    async fn api_get(&self, Parameters(params): Parameters<ApiGetParams>) -> String {
        match self.client.get(&params.path, &query_pairs(&params.params)).await {
            Ok(response) => pretty(&json!(response)),
            Err(e) => error_json(e),
        }
    }

    #[tool(name = "api_post", description = "Esegue POST request all'API")]
    async fn api_post(&self, Parameters(params): Parameters<ApiPostParams>) -> String {
        match self.client.post(&params.path, &params.body).await {
            Ok(response) => pretty(&json!(response)),
            Err(e) => error_json(e),
        }
    }

    #[tool(
        name = "api_schema",
        description = "Recupera OpenAPI schema dell'API (endpoints disponibili)"
    )]
    async fn api_schema(&self) -> String {
        match self.fetch_schema().await {
            Ok(Some(schema)) => pretty(&schema),
            Ok(None) => schema_unavailable(),
            Err(e) => e,
        }
    }

    #[tool(
        name = "api_list_endpoints",
        description = "Lista tutti gli endpoints API disponibili con metodi e descrizioni"
    )]
    async fn api_list_endpoints(&self) -> String {
        match self.fetch_schema().await {
            Ok(Some(schema)) => pretty(&json!(list_endpoints(&schema))),
            Ok(None) => schema_unavailable(),
            Err(e) => e,
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler(router = self.tool_router)]
impl ServerHandler for InspectorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: rmcp::model::ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability::default()),
                ..Default::default()
            },
            server_info: rmcp::model::Implementation {
                name: "vinted-api-inspector".to_string(),
                title: Some("Vinted Optimizer API Inspector".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Inspect a locally running Vinted Optimizer API while developing.\n\n\
                 - api_health() - GET /api/health, reports connection errors instead of failing.\n\
                 - api_get(path, params) - authenticated GET.\n\
                 - api_post(path, body) - authenticated POST with a JSON body.\n\
                 - api_schema() - full OpenAPI document (API must run with DEBUG=true).\n\
                 - api_list_endpoints() - path, method, summary and tags per operation."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::InspectorConfig;
    use std::time::Duration;

    fn unreachable_server() -> InspectorServer {
        // Port 9 (discard) on loopback is closed on any sane test host
        let client = ApiClient::new(&InspectorConfig {
            base_url: "http://127.0.0.1:9".into(),
            api_key: None,
            timeout: Duration::from_secs(2),
        })
        .unwrap();
        InspectorServer::new(client)
    }

    #[tokio::test]
    async fn health_reports_connection_error_with_api_url() {
        let out: Value = serde_json::from_str(&unreachable_server().api_health().await).unwrap();

        assert!(out["error"].as_str().is_some());
        assert_eq!(out["api_url"], "http://127.0.0.1:9/");
    }

    #[tokio::test]
    async fn get_reports_error_instead_of_failing() {
        let params = ApiGetParams {
            path: "/api/v1/health".into(),
            params: BTreeMap::new(),
        };
        let out: Value =
            serde_json::from_str(&unreachable_server().api_get(Parameters(params)).await).unwrap();

        assert!(out.get("error").is_some());
    }

    async fn spawn(app: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn spawn_api(debug: bool) -> String {
        let settings = vinted_api::Settings {
            debug,
            ..Default::default()
        };
        let state = vinted_api::AppState::with_probes(settings, Vec::new());
        spawn(vinted_api::router(std::sync::Arc::new(state))).await
    }

    fn server_for(base_url: String) -> InspectorServer {
        let client = ApiClient::new(&InspectorConfig {
            base_url,
            api_key: None,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        InspectorServer::new(client)
    }

    fn parse(out: String) -> Value {
        serde_json::from_str(&out).unwrap()
    }

    #[tokio::test]
    async fn schema_tools_explain_missing_debug() {
        let server = server_for(spawn_api(false).await);
        let expected = json!({
            "error": "OpenAPI schema non disponibile",
            "tip": "Avvia API con DEBUG=true"
        });

        assert_eq!(parse(server.api_schema().await), expected);
        assert_eq!(parse(server.api_list_endpoints().await), expected);
    }

    #[tokio::test]
    async fn schema_tools_read_api_document_in_debug() {
        let server = server_for(spawn_api(true).await);

        let schema = parse(server.api_schema().await);
        assert_eq!(schema["openapi"], "3.1.0");
        assert!(schema["paths"]["/api/ready"]["get"].is_object());

        let endpoints = parse(server.api_list_endpoints().await);
        let endpoints = endpoints.as_array().unwrap();
        assert_eq!(endpoints.len(), 4);
        assert!(endpoints.contains(&json!({
            "path": "/api/health",
            "method": "GET",
            "summary": "Health check for monitoring and load balancers",
            "tags": ["Health"]
        })));
    }

    #[tokio::test]
    async fn schema_falls_back_to_root_openapi_path() {
        let document = json!({
            "openapi": "3.1.0",
            "paths": { "/items": { "get": { "summary": "Items", "tags": ["Items"] } } }
        });
        let served = document.clone();
        let app = axum::Router::new().route(
            "/openapi.json",
            axum::routing::get(move || async move { axum::Json(served) }),
        );
        let server = server_for(spawn(app).await);

        assert_eq!(parse(server.api_schema().await), document);
        assert_eq!(
            parse(server.api_list_endpoints().await),
            json!([{ "path": "/items", "method": "GET", "summary": "Items", "tags": ["Items"] }])
        );
    }

    #[tokio::test]
    async fn post_returns_status_and_decoded_body() {
        let app = axum::Router::new().route(
            "/echo",
            axum::routing::post(|axum::Json(body): axum::Json<Value>| async move {
                axum::Json(json!({ "received": body }))
            }),
        );
        let server = server_for(spawn(app).await);
        let params = ApiPostParams {
            path: "/echo".into(),
            body: json!({ "title": "Giacca", "price": 25 }),
        };

        assert_eq!(
            parse(server.api_post(Parameters(params)).await),
            json!({
                "status": 200,
                "body": { "received": { "title": "Giacca", "price": 25 } }
            })
        );
    }

    #[tokio::test]
    async fn get_passes_query_params_through() {
        let app = axum::Router::new().route(
            "/search",
            axum::routing::get(
                |axum::extract::Query(q): axum::extract::Query<BTreeMap<String, String>>| async move {
                    axum::Json(json!(q))
                },
            ),
        );
        let server = server_for(spawn(app).await);
        let mut query = BTreeMap::new();
        query.insert("q".to_string(), json!("giacca"));
        query.insert("limit".to_string(), json!(20));
        let params = ApiGetParams {
            path: "/search".into(),
            params: query,
        };

        assert_eq!(
            parse(server.api_get(Parameters(params)).await),
            json!({ "status": 200, "body": { "q": "giacca", "limit": "20" } })
        );
    }

    #[test]
    fn server_info_names_the_inspector() {
        let info = unreachable_server().get_info();
        assert_eq!(info.server_info.name, "vinted-api-inspector");
    }
}
