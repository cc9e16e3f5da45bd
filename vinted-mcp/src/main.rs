//! # vinted-mcp
//!
//! Stdio MCP server wrapping the Vinted Optimizer API.
//!
//! ```bash
//! API_BASE_URL=http://localhost:8000 API_KEY=... vinted-mcp
//! ```

use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::ServiceExt;
use tracing::info;

use vinted_mcp::client::{DEFAULT_BASE_URL, InspectorConfig};
use vinted_mcp::{ApiClient, InspectorServer};

#[derive(Parser, Debug)]
#[command(name = "vinted-mcp")]
#[command(about = "MCP server for inspecting the Vinted Optimizer API")]
#[command(version)]
struct Args {
    /// Base URL of the API to inspect
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Unknown panic".to_string())
}

/// Report panics on stderr and exit with status 1.
///
/// rmcp panics with a broken-pipe message when the MCP client closes stdio
/// mid-write. That is a normal disconnect for a stdio server, so it gets a
/// one-line notice instead of a panic report.
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let msg = panic_message(info.payload());
        if is_broken_pipe(&msg) {
            eprintln!("[vinted-mcp] Client disconnected (broken pipe), shutting down");
        } else {
            let location = info
                .location()
                .map(|loc| format!(" at {}:{}", loc.file(), loc.line()))
                .unwrap_or_default();
            eprintln!("[vinted-mcp] Panic{}: {}", location, msg);
        }
        std::process::exit(1);
    }));
}

fn is_broken_pipe(msg: &str) -> bool {
    msg.contains("Broken pipe") || msg.contains("os error 32")
}

/// Writing to stdout after the client hung up raises SIGPIPE, whose default
/// action kills the process silently. With the signal ignored the write
/// returns EPIPE, which the error path and panic hook above recognise.
#[cfg(unix)]
fn ignore_sigpipe() {
    // SAFETY: SIG_IGN installs no handler code, so no async-signal-safety concerns.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_IGN);
    }
}

#[cfg(not(unix))]
fn ignore_sigpipe() {}

async fn run_server() -> Result<()> {
    let args = Args::parse();

    // stdout carries MCP JSON-RPC, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = InspectorConfig {
        base_url: args.api_base_url,
        api_key: args.api_key,
        timeout: Duration::from_secs(args.timeout_secs),
    };
    let client = ApiClient::new(&config).context("Failed to build API client")?;

    info!(
        "Starting vinted-mcp v{} against {}",
        env!("CARGO_PKG_VERSION"),
        client.base_url()
    );

    InspectorServer::new(client)
        .serve(rmcp::transport::stdio())
        .await?
        .waiting()
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    ignore_sigpipe();
    install_panic_hook();

    match run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&format!("{:?}", e)) => {
            eprintln!("[vinted-mcp] Client disconnected, shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[vinted-mcp] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Args::try_parse_from(["vinted-mcp", "--timeout-secs", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let args = Args::try_parse_from(["vinted-mcp", "--timeout-secs", "3"]).unwrap();
        assert_eq!(args.timeout_secs, 3);
    }

    #[test]
    fn broken_pipe_messages_are_recognised() {
        assert!(is_broken_pipe("failed printing to stdout: Broken pipe (os error 32)"));
        assert!(!is_broken_pipe("connection refused"));
    }
}
