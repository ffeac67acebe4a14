/*
[INPUT]:  Crate modules for commands, config persistence, and output
[OUTPUT]: Public CLI crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;
pub mod output;

/// Installs the fmt subscriber on stderr so stdout stays a clean pipe for
/// API response bodies. Debug/dry-run request dumps land here.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))?;
    Ok(())
}
