/*
[INPUT]:  Order subcommand arguments
[OUTPUT]: Raw order endpoint responses on stdout
[POS]:    Command layer - order group
[UPDATE]: When adding order subcommands
*/

use anyhow::Result;
use clap::Subcommand;
use dnse_adapter::{DnseClient, OrderHistoryQuery};

use crate::output::print_response;

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// List current orders
    List {
        account_no: String,
        market_type: String,
    },
    /// Get order details
    Detail {
        account_no: String,
        order_id: String,
        market_type: String,
    },
    /// Get order history
    History {
        account_no: String,
        market_type: String,
        /// From date (format: YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// To date (format: YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Page size
        #[arg(long, default_value_t = 50)]
        page_size: u32,
        /// Page index
        #[arg(long, default_value_t = 0)]
        page_index: u32,
    },
    /// Get executed deals
    Deals {
        account_no: String,
        market_type: String,
    },
}

impl OrderCommands {
    pub async fn run(self, client: &DnseClient, dry_run: bool) -> Result<()> {
        let response = match self {
            OrderCommands::List {
                account_no,
                market_type,
            } => client.get_orders(&account_no, &market_type, dry_run).await?,
            OrderCommands::Detail {
                account_no,
                order_id,
                market_type,
            } => {
                client
                    .get_order_detail(&account_no, &order_id, &market_type, dry_run)
                    .await?
            }
            OrderCommands::History {
                account_no,
                market_type,
                from,
                to,
                page_size,
                page_index,
            } => {
                let query = OrderHistoryQuery {
                    from,
                    to,
                    page_size: Some(page_size),
                    page_index: Some(page_index),
                };
                client
                    .get_order_history(&account_no, &market_type, query, dry_run)
                    .await?
            }
            OrderCommands::Deals {
                account_no,
                market_type,
            } => client.get_deals(&account_no, &market_type, dry_run).await?,
        };
        print_response(&response);
        Ok(())
    }
}
