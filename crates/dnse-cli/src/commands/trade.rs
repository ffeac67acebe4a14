/*
[INPUT]:  Trade subcommand arguments including trading tokens
[OUTPUT]: Raw order mutation responses on stdout
[POS]:    Command layer - trading group
[UPDATE]: When adding trading subcommands or payload fields
*/

use anyhow::Result;
use clap::Subcommand;
use dnse_adapter::{DnseClient, OrderPayload, Side};

use crate::output::print_response;

#[derive(Subcommand, Debug)]
pub enum TradeCommands {
    /// Place a new order
    Order {
        market_type: String,
        symbol: String,
        /// "buy" or "sell"
        side: Side,
        order_type: String,
        price: f64,
        quantity: f64,
        trading_token: String,
        /// Stop price (for conditional orders)
        #[arg(long)]
        price_stop: Option<f64>,
    },
    /// Modify an existing order
    Modify {
        account_no: String,
        order_id: String,
        market_type: String,
        symbol: String,
        /// "buy" or "sell"
        side: Side,
        order_type: String,
        price: f64,
        quantity: f64,
        trading_token: String,
        /// Stop price (for conditional orders)
        #[arg(long)]
        price_stop: Option<f64>,
    },
    /// Cancel an order
    Cancel {
        account_no: String,
        order_id: String,
        market_type: String,
        trading_token: String,
    },
}

impl TradeCommands {
    pub async fn run(self, client: &DnseClient, dry_run: bool) -> Result<()> {
        let response = match self {
            TradeCommands::Order {
                market_type,
                symbol,
                side,
                order_type,
                price,
                quantity,
                trading_token,
                price_stop,
            } => {
                let payload = OrderPayload {
                    symbol,
                    price,
                    quantity,
                    side,
                    order_type,
                    price_stop,
                };
                client
                    .post_order(&market_type, &payload, &trading_token, dry_run)
                    .await?
            }
            TradeCommands::Modify {
                account_no,
                order_id,
                market_type,
                symbol,
                side,
                order_type,
                price,
                quantity,
                trading_token,
                price_stop,
            } => {
                let payload = OrderPayload {
                    symbol,
                    price,
                    quantity,
                    side,
                    order_type,
                    price_stop,
                };
                client
                    .put_order(
                        &account_no,
                        &order_id,
                        &market_type,
                        &payload,
                        &trading_token,
                        dry_run,
                    )
                    .await?
            }
            TradeCommands::Cancel {
                account_no,
                order_id,
                market_type,
                trading_token,
            } => {
                client
                    .cancel_order(&account_no, &order_id, &market_type, &trading_token, dry_run)
                    .await?
            }
        };
        print_response(&response);
        Ok(())
    }
}
