use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use postfetch_client::{ReqwestClient, fetch_data};

/// Fetch the posts feed and print the raw response to stdout.
///
/// The endpoint is fixed at build time; there is nothing to configure.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();
    env_logger::init();

    let client = ReqwestClient::new();
    let data = fetch_data(&client).await?;

    io::stdout().write_all(&data)?;
    Ok(())
}
