/*
[INPUT]:  OTP and trading token subcommand arguments
[OUTPUT]: Raw registration endpoint responses on stdout
[POS]:    Command layer - authentication group
[UPDATE]: When the registration flow changes
*/

use anyhow::Result;
use clap::Subcommand;
use dnse_adapter::{DEFAULT_OTP_TYPE, DnseClient};

use crate::output::print_response;

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Send OTP via email
    SendOtp {
        email: String,
        /// OTP type
        #[arg(long, default_value = DEFAULT_OTP_TYPE)]
        otp_type: String,
    },
    /// Create trading token
    CreateToken { otp_type: String, passcode: String },
}

impl AuthCommands {
    pub async fn run(self, client: &DnseClient, dry_run: bool) -> Result<()> {
        let response = match self {
            AuthCommands::SendOtp { email, otp_type } => {
                client.send_email_otp(&email, &otp_type, dry_run).await?
            }
            AuthCommands::CreateToken { otp_type, passcode } => {
                client
                    .create_trading_token(&otp_type, &passcode, dry_run)
                    .await?
            }
        };
        print_response(&response);
        Ok(())
    }
}
