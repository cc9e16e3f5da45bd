use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use vinted_api::{Cli, logging};

async fn run() -> Result<()> {
    let settings = Cli::parse().into_settings()?;
    logging::init(&settings)?;
    vinted_api::serve(settings).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[vinted-api] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
