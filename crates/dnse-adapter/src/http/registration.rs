/*
[INPUT]:  OTP type, passcode, and email for token issuance
[OUTPUT]: Raw trading token and OTP dispatch responses
[POS]:    HTTP layer - registration endpoints
[UPDATE]: When the registration flow or OTP types change
*/

use crate::http::client::{ApiResponse, DnseClient};
use crate::http::error::Result;
use crate::http::request::RequestSpec;
use crate::types::{EmailOtpRequest, TradingTokenRequest};

/// OTP type used when the caller does not specify one.
pub const DEFAULT_OTP_TYPE: &str = "email_otp";

impl DnseClient {
    /// POST /registration/trading-token
    pub async fn create_trading_token(
        &self,
        otp_type: &str,
        passcode: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let body = TradingTokenRequest {
            otp_type: otp_type.to_string(),
            passcode: passcode.to_string(),
        };
        let spec = RequestSpec::post("/registration/trading-token")
            .json_body(&body)?
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// POST /registration/send-email-otp
    pub async fn send_email_otp(
        &self,
        email: &str,
        otp_type: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let body = EmailOtpRequest {
            email: email.to_string(),
            otp_type: otp_type.to_string(),
        };
        let spec = RequestSpec::post("/registration/send-email-otp")
            .json_body(&body)?
            .dry_run(dry_run);
        self.request(spec).await
    }
}
