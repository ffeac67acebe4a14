/*
[INPUT]:  Market data subcommand arguments
[OUTPUT]: Raw market data responses on stdout
[POS]:    Command layer - market data group
[UPDATE]: When adding market data subcommands
*/

use anyhow::Result;
use clap::Subcommand;
use dnse_adapter::DnseClient;

use crate::output::print_response;

#[derive(Subcommand, Debug)]
pub enum MarketCommands {
    /// Get security definition
    Secdef {
        symbol: String,
        /// Board ID
        #[arg(long)]
        board_id: Option<String>,
    },
    /// Get PPSE (price priority stream event) data
    Ppse {
        account_no: String,
        market_type: String,
        symbol: String,
        price: f64,
        loan_package_id: String,
    },
}

impl MarketCommands {
    pub async fn run(self, client: &DnseClient, dry_run: bool) -> Result<()> {
        let response = match self {
            MarketCommands::Secdef { symbol, board_id } => {
                client
                    .get_security_definition(&symbol, board_id.as_deref(), dry_run)
                    .await?
            }
            MarketCommands::Ppse {
                account_no,
                market_type,
                symbol,
                price,
                loan_package_id,
            } => {
                client
                    .get_ppse(
                        &account_no,
                        &market_type,
                        &symbol,
                        price,
                        &loan_package_id,
                        dry_run,
                    )
                    .await?
            }
        };
        print_response(&response);
        Ok(())
    }
}
