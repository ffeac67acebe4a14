/*
[INPUT]:  Order queries and mutation payloads with trading-token headers
[OUTPUT]: Raw order, history, and PPSE responses; order mutation results
[POS]:    HTTP layer - order endpoints (mutations require a trading token)
[UPDATE]: When adding new order endpoints or changing the order flow
*/

use crate::http::client::{ApiResponse, DnseClient};
use crate::http::error::Result;
use crate::http::request::RequestSpec;
use crate::types::{OrderHistoryQuery, OrderPayload};

impl DnseClient {
    /// GET /accounts/{account_no}/orders?marketType={market_type}
    pub async fn get_orders(
        &self,
        account_no: &str,
        market_type: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::get(format!("/accounts/{account_no}/orders"))
            .query("marketType", market_type)
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// GET /accounts/{account_no}/orders/{order_id}?marketType={market_type}
    pub async fn get_order_detail(
        &self,
        account_no: &str,
        order_id: &str,
        market_type: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::get(format!("/accounts/{account_no}/orders/{order_id}"))
            .query("marketType", market_type)
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// GET /accounts/{account_no}/orders/history with optional paging filters
    pub async fn get_order_history(
        &self,
        account_no: &str,
        market_type: &str,
        query: OrderHistoryQuery,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::get(format!("/accounts/{account_no}/orders/history"))
            .query("marketType", market_type)
            .query_opt("from", query.from)
            .query_opt("to", query.to)
            .query_opt("pageSize", query.page_size)
            .query_opt("pageIndex", query.page_index)
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// GET /accounts/{account_no}/ppse - price-priority stream event lookup
    pub async fn get_ppse(
        &self,
        account_no: &str,
        market_type: &str,
        symbol: &str,
        price: f64,
        loan_package_id: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::get(format!("/accounts/{account_no}/ppse"))
            .query("marketType", market_type)
            .query("symbol", symbol)
            .query("price", price)
            .query("loanPackageId", loan_package_id)
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// POST /accounts/orders?marketType={market_type}
    ///
    /// Not idempotent; callers retrying a failed placement own that trade-off.
    pub async fn post_order(
        &self,
        market_type: &str,
        payload: &OrderPayload,
        trading_token: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::post("/accounts/orders")
            .query("marketType", market_type)
            .json_body(payload)?
            .header("trading-token", trading_token)
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// PUT /accounts/{account_no}/orders/{order_id}?marketType={market_type}
    pub async fn put_order(
        &self,
        account_no: &str,
        order_id: &str,
        market_type: &str,
        payload: &OrderPayload,
        trading_token: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::put(format!("/accounts/{account_no}/orders/{order_id}"))
            .query("marketType", market_type)
            .json_body(payload)?
            .header("trading-token", trading_token)
            .dry_run(dry_run);
        self.request(spec).await
    }

    /// DELETE /accounts/{account_no}/orders/{order_id}?marketType={market_type}
    pub async fn cancel_order(
        &self,
        account_no: &str,
        order_id: &str,
        market_type: &str,
        trading_token: &str,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::delete(format!("/accounts/{account_no}/orders/{order_id}"))
            .query("marketType", market_type)
            .header("trading-token", trading_token)
            .dry_run(dry_run);
        self.request(spec).await
    }
}
