//! # vinted-mcp
//!
//! MCP server for inspecting a running Vinted Optimizer API during
//! development. Exposes health, GET/POST and OpenAPI tools over stdio.
//!
//! - [`client`] - HTTP client with bearer auth and content-type aware decoding
//! - [`server`] - MCP tool router and server handler

pub mod client;
pub mod server;

pub use client::{ApiClient, ApiResponse, Endpoint, InspectorConfig, InspectorError};
pub use server::InspectorServer;
