/*
[INPUT]:  Account subcommand arguments
[OUTPUT]: Raw account endpoint responses on stdout
[POS]:    Command layer - account group
[UPDATE]: When adding account subcommands
*/

use anyhow::Result;
use clap::Subcommand;
use dnse_adapter::DnseClient;

use crate::output::print_response;

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// List all accounts
    List,
    /// Get account balances
    Balances { account_no: String },
    /// Query loan packages
    LoanPackages {
        account_no: String,
        market_type: String,
        /// Filter by symbol
        #[arg(long)]
        symbol: Option<String>,
    },
}

impl AccountCommands {
    pub async fn run(self, client: &DnseClient, dry_run: bool) -> Result<()> {
        let response = match self {
            AccountCommands::List => client.get_accounts(dry_run).await?,
            AccountCommands::Balances { account_no } => {
                client.get_balances(&account_no, dry_run).await?
            }
            AccountCommands::LoanPackages {
                account_no,
                market_type,
                symbol,
            } => {
                client
                    .get_loan_packages(&account_no, &market_type, symbol.as_deref(), dry_run)
                    .await?
            }
        };
        print_response(&response);
        Ok(())
    }
}
