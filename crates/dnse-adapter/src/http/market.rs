/*
[INPUT]:  Symbol identifiers and optional board filter
[OUTPUT]: Raw security definition responses
[POS]:    HTTP layer - market data endpoints
[UPDATE]: When adding new market data endpoints
*/

use crate::http::client::{ApiResponse, DnseClient};
use crate::http::error::Result;
use crate::http::request::RequestSpec;

impl DnseClient {
    /// GET /price/secdef/{symbol}[?boardId={board_id}]
    pub async fn get_security_definition(
        &self,
        symbol: &str,
        board_id: Option<&str>,
        dry_run: bool,
    ) -> Result<ApiResponse> {
        let spec = RequestSpec::get(format!("/price/secdef/{symbol}"))
            .query_opt("boardId", board_id)
            .dry_run(dry_run);
        self.request(spec).await
    }
}
