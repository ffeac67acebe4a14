/*
[INPUT]:  CLI arguments, environment variables, saved configuration
[OUTPUT]: Signed API calls with raw responses on stdout
[POS]:    Binary entry point
[UPDATE]: When changing startup flow or top-level error handling
*/

use anyhow::Result;
use clap::Parser;

use dnse_cli::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dnse_cli::init_tracing()?;
    let cli = Cli::parse();
    cli.run().await
}
