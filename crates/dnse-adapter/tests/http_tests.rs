/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the signed request pipeline
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{setup_mock_server, test_client, test_client_without_nonce};
use dnse_adapter::{OrderHistoryQuery, OrderPayload, Side};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_accounts_passes_auth_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(header("x-api-key", "test-key"))
        .and(header_exists("date"))
        .and(header_exists("x-signature"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"accounts":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = assert_ok!(client.get_accounts(false).await);

    assert_eq!(response.status, Some(200));
    assert_eq!(response.body.as_deref(), Some(r#"{"accounts":[]}"#));
}

#[tokio::test]
async fn test_signature_header_shape() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_ok!(client.get_accounts(false).await);

    let requests = server.received_requests().await.expect("request recording");
    let signature = requests[0]
        .headers
        .get("x-signature")
        .expect("x-signature header")
        .to_str()
        .unwrap();

    assert!(signature.starts_with(
        "Signature keyId=\"test-key\",algorithm=\"hmac-sha256\",headers=\"(request-target) date\",signature=\""
    ));
    // Nonce generation is on by default: one 32-char hex token per request.
    let nonce = signature
        .split("nonce=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("nonce clause");
    assert_eq!(nonce.len(), 32);
    assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));

    let date = requests[0].headers.get("date").unwrap().to_str().unwrap();
    assert!(date.ends_with(" +0000"));
    assert_eq!(date.len(), "Sun, 01 Jan 2023 00:00:00 +0000".len());
}

#[tokio::test]
async fn test_signature_header_without_nonce() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = test_client_without_nonce(&server.uri());
    assert_ok!(client.get_accounts(false).await);

    let requests = server.received_requests().await.expect("request recording");
    let signature = requests[0]
        .headers
        .get("x-signature")
        .expect("x-signature header")
        .to_str()
        .unwrap();
    assert!(!signature.contains("nonce="));
    assert!(signature.contains("headers=\"(request-target) date\""));
}

#[tokio::test]
async fn test_place_order_end_to_end() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/accounts/orders"))
        .and(query_param("marketType", "stock"))
        .and(header("trading-token", "tok"))
        .and(header("content-type", "application/json"))
        .and(header_exists("x-signature"))
        .and(body_json(serde_json::json!({
            "symbol": "AAA",
            "price": 10.5,
            "quantity": 100,
            "side": "buy",
            "orderType": "LO",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"12"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let payload = OrderPayload {
        symbol: "AAA".to_string(),
        price: 10.5,
        quantity: 100.0,
        side: Side::Buy,
        order_type: "LO".to_string(),
        price_stop: None,
    };

    let client = test_client(&server.uri());
    let response = assert_ok!(client.post_order("stock", &payload, "tok", false).await);
    assert_eq!(response.status, Some(200));
    assert_eq!(response.body.as_deref(), Some(r#"{"id":"12"}"#));
}

#[tokio::test]
async fn test_modify_and_cancel_order() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/accounts/0001/orders/42"))
        .and(query_param("marketType", "stock"))
        .and(header("trading-token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/accounts/0001/orders/42"))
        .and(query_param("marketType", "stock"))
        .and(header("trading-token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let payload = OrderPayload {
        symbol: "AAA".to_string(),
        price: 11.0,
        quantity: 50.0,
        side: Side::Sell,
        order_type: "LO".to_string(),
        price_stop: Some(10.2),
    };

    let client = test_client(&server.uri());
    assert_ok!(client.put_order("0001", "42", "stock", &payload, "tok", false).await);
    assert_ok!(client.cancel_order("0001", "42", "stock", "tok", false).await);
}

#[tokio::test]
async fn test_order_history_preserves_zero_page_index() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/0001/orders/history"))
        .and(query_param("marketType", "stock"))
        .and(query_param("pageSize", "50"))
        .and(query_param("pageIndex", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let query = OrderHistoryQuery {
        from: None,
        to: None,
        page_size: Some(50),
        page_index: Some(0),
    };

    let client = test_client(&server.uri());
    let response = assert_ok!(client.get_order_history("0001", "stock", query, false).await);
    assert_eq!(response.status, Some(200));

    // "from" and "to" were absent and must not appear at all.
    let requests = server.received_requests().await.expect("request recording");
    let query_string = requests[0].url.query().unwrap_or("");
    assert!(!query_string.contains("from="));
    assert!(!query_string.contains("to="));
}

#[tokio::test]
async fn test_ppse_stringifies_numeric_params() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/0001/ppse"))
        .and(query_param("marketType", "stock"))
        .and(query_param("symbol", "AAA"))
        .and(query_param("price", "10.5"))
        .and(query_param("loanPackageId", "1035"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_ok!(client.get_ppse("0001", "stock", "AAA", 10.5, "1035", false).await);
}

#[tokio::test]
async fn test_security_definition_with_optional_board() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/price/secdef/AAA"))
        .and(query_param("boardId", "G1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_ok!(client.get_security_definition("AAA", Some("G1"), false).await);
}

#[tokio::test]
async fn test_registration_bodies() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/registration/send-email-otp"))
        .and(body_json(serde_json::json!({
            "email": "trader@example.com",
            "otpType": "email_otp",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/registration/trading-token"))
        .and(body_json(serde_json::json!({
            "otpType": "email_otp",
            "passcode": "123456",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"tradingToken":"tok"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_ok!(client.send_email_otp("trader@example.com", "email_otp", false).await);
    assert_ok!(client.create_trading_token("email_otp", "123456", false).await);
}

#[tokio::test]
async fn test_dry_run_never_reaches_transport() {
    let server = setup_mock_server().await;
    // No mocks mounted: any request hitting the server would 404, and the
    // recorder below would see it.

    let payload = OrderPayload {
        symbol: "AAA".to_string(),
        price: 10.5,
        quantity: 100.0,
        side: Side::Buy,
        order_type: "LO".to_string(),
        price_stop: None,
    };

    let client = test_client(&server.uri());
    let response = assert_ok!(client.post_order("stock", &payload, "tok", true).await);
    assert_eq!(response.status, None);
    assert_eq!(response.body, None);

    let accounts = assert_ok!(client.get_accounts(true).await);
    assert_eq!(accounts.status, None);
    assert_eq!(accounts.body, None);

    let requests = server.received_requests().await.expect("request recording");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_non_2xx_status_is_returned_not_raised() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts/0001/balances"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = assert_ok!(client.get_balances("0001", false).await);
    assert_eq!(response.status, Some(404));
    assert_eq!(response.body.as_deref(), Some(r#"{"error":"not found"}"#));
}

#[tokio::test]
async fn test_nonces_are_fresh_per_request() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_ok!(client.get_accounts(false).await);
    assert_ok!(client.get_accounts(false).await);

    let requests = server.received_requests().await.expect("request recording");
    let nonce_of = |idx: usize| -> String {
        let value = requests[idx]
            .headers
            .get("x-signature")
            .unwrap()
            .to_str()
            .unwrap();
        value
            .split("nonce=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("nonce clause")
            .to_string()
    };
    assert_ne!(nonce_of(0), nonce_of(1));
}
