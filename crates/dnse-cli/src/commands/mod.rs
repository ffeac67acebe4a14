/*
[INPUT]:  Parsed CLI arguments and saved configuration
[OUTPUT]: Dispatched subcommands against a configured client
[POS]:    Command layer - argument parsing and client construction
[UPDATE]: When adding command groups or changing credential resolution
*/

pub mod account;
pub mod auth;
pub mod config;
pub mod market;
pub mod order;
pub mod trade;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use dnse_adapter::{ClientConfig, DnseClient};

use crate::config as config_store;
use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "dnse", version, about = "Command line client for the DNSE OpenAPI trading service")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// API key (falls back to DNSE_API_KEY, then the saved config file)
    #[arg(long, global = true, env = "DNSE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API secret (falls back to DNSE_API_SECRET, then the saved config file)
    #[arg(long, global = true, env = "DNSE_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print the prepared request and skip the network call
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log each prepared request before sending (same as DEBUG=true)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(account::AccountCommands),
    /// Order management commands
    #[command(subcommand)]
    Order(order::OrderCommands),
    /// Trading operations
    #[command(subcommand)]
    Trade(trade::TradeCommands),
    /// Market data commands
    #[command(subcommand)]
    Market(market::MarketCommands),
    /// Authentication and token management
    #[command(subcommand)]
    Auth(auth::AuthCommands),
    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let dry_run = self.global.dry_run;
        match self.command {
            Commands::Config(cmd) => cmd.run(),
            Commands::Account(cmd) => cmd.run(&build_client(&self.global)?, dry_run).await,
            Commands::Order(cmd) => cmd.run(&build_client(&self.global)?, dry_run).await,
            Commands::Trade(cmd) => cmd.run(&build_client(&self.global)?, dry_run).await,
            Commands::Market(cmd) => cmd.run(&build_client(&self.global)?, dry_run).await,
            Commands::Auth(cmd) => cmd.run(&build_client(&self.global)?, dry_run).await,
        }
    }
}

pub(crate) fn build_client(global: &GlobalArgs) -> Result<DnseClient> {
    let file_config = config_store::load();
    let resolved = resolve_credentials(global, &file_config)?;
    let debug = global.debug || env_debug();

    let config = ClientConfig::new(resolved.api_key, resolved.api_secret)
        .with_base_url(resolved.base_url)
        .with_debug(debug);
    Ok(DnseClient::new(config)?)
}

#[derive(Debug)]
struct ResolvedCredentials {
    api_key: String,
    api_secret: String,
    base_url: String,
}

/// Priority: CLI options > environment variables (clap env fallback) >
/// config file. Missing credentials are fatal.
fn resolve_credentials(global: &GlobalArgs, file_config: &CliConfig) -> Result<ResolvedCredentials> {
    let api_key = global.api_key.clone().or_else(|| file_config.api_key.clone());
    let api_secret = global
        .api_secret
        .clone()
        .or_else(|| file_config.api_secret.clone());
    let base_url = global
        .base_url
        .clone()
        .unwrap_or_else(|| file_config.base_url.clone());

    match (api_key, api_secret) {
        (Some(api_key), Some(api_secret)) => Ok(ResolvedCredentials {
            api_key,
            api_secret,
            base_url,
        }),
        _ => bail!(
            "API key and secret are required.\n\
             Set them using:\n  \
             1. \"dnse config set\" (saved to ~/.dnse-cli/config.json)\n  \
             2. DNSE_API_KEY and DNSE_API_SECRET environment variables\n  \
             3. --api-key and --api-secret options"
        ),
    }
}

fn env_debug() -> bool {
    std::env::var("DEBUG")
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
