/*
[INPUT]:  Account identifiers and market filters
[OUTPUT]: Raw account, balance, loan package, and deal responses
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or query parameters
*/

use crate::http::client::{ApiResponse, DnseClient};
use crate::http::error::Result;
use crate::http::request::RequestSpec;

impl DnseClient {
    /// GET /accounts
    pub async fn get_accounts(&self, dry_run: bool) -> Result<ApiResponse> {
        self.request(RequestSpec::get("/accounts").dry_run(dry_run))
            .await
    }

    /// GET /accounts/{account_no}/balances
    pub async fn get_balances(&self, account_no: &str, dry_run: bool) -> Result<ApiResponse> {
        self.request(RequestSpec::get(format!("/accounts/{account_no}/balances")).dry_run(dry_run))
            .await
    }

    /// GET /accounts/{account_no}/loan-packages?marketType={market_type}[&symbol={symbol}]
    pub async fn get_loan_packages(
        &self,
        account_no: &str,
        market_type: &str,
        symbol: Option<&str>,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::get(format!("/accounts/{account_no}/loan-packages"))
            .query("marketType", market_type)
            .query_opt("symbol", symbol)
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// GET /accounts/{account_no}/deals?marketType={market_type}
    pub async fn get_deals(
        &self,
        account_no: &str,
        market_type: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::get(format!("/accounts/{account_no}/deals"))
            .query("marketType", market_type)
            .dry_run(dry_run);
        self.request(spec).await
    }
}
