//! HTTP client for the Vinted Optimizer API.
//!
//! Every request carries `Content-Type: application/json` and, when an API
//! key is configured, `Authorization: Bearer <key>`. Response bodies are
//! decoded as JSON only when the server says they are JSON; anything else
//! comes back as a string.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the OpenAPI document may live, tried in order.
pub const SCHEMA_PATHS: &[&str] = &["/api/openapi.json", "/openapi.json"];

#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    #[error("invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid request path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Status code plus decoded body of one API call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// One operation from an OpenAPI `paths` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub path: String,
    pub method: String,
    pub summary: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &InspectorConfig) -> Result<Self, InspectorError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|source| InspectorError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| InspectorError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append `path` to the base URL, keeping any prefix the base carries
    /// (`http://host/backend` + `/api/health` -> `http://host/backend/api/health`).
    fn endpoint_url(&self, path: &str) -> Result<Url, InspectorError> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|source| InspectorError::InvalidPath {
            path: path.to_string(),
            source,
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, InspectorError> {
        let url = self.endpoint_url(path)?;
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    pub async fn health(&self) -> Result<ApiResponse, InspectorError> {
        self.get("/api/health", &[]).await
    }

    pub async fn get(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<ApiResponse, InspectorError> {
        let response = self.request(Method::GET, path)?.query(params).send().await?;
        decode(response).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, InspectorError> {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        decode(response).await
    }

    /// Fetch the OpenAPI document; `None` when no candidate path serves one.
    pub async fn openapi_schema(&self) -> Result<Option<Value>, InspectorError> {
        for path in SCHEMA_PATHS {
            let response = self.request(Method::GET, path)?.send().await?;
            if response.status() == StatusCode::OK {
                return Ok(Some(response.json::<Value>().await?));
            }
            debug!("no schema at {} ({})", path, response.status());
        }
        Ok(None)
    }
}

async fn decode(response: Response) -> Result<ApiResponse, InspectorError> {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    let body = if is_json {
        response.json::<Value>().await?
    } else {
        Value::String(response.text().await?)
    };

    Ok(ApiResponse { status, body })
}

/// Query parameters as string pairs; non-string JSON values use their JSON text.
pub fn query_pairs(params: &BTreeMap<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| {
            let value = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), value)
        })
        .collect()
}

/// Flatten an OpenAPI document's `paths` into one entry per operation.
pub fn list_endpoints(schema: &Value) -> Vec<Endpoint> {
    let Some(paths) = schema.get("paths").and_then(Value::as_object) else {
        return Vec::new();
    };

    paths
        .iter()
        .filter_map(|(path, methods)| Some((path, methods.as_object()?)))
        .flat_map(|(path, methods)| {
            methods.iter().map(move |(method, info)| Endpoint {
                path: path.clone(),
                method: method.to_uppercase(),
                summary: info
                    .get("summary")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                tags: info
                    .get("tags")
                    .and_then(Value::as_array)
                    .map(|tags| {
                        tags.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            })
        })
        .collect()
}
