/*
[INPUT]:  Raw API responses from the adapter
[OUTPUT]: Response bodies (or a status/body fallback) on stdout
[POS]:    Output layer - response printing
[UPDATE]: When changing how responses are rendered
*/

use dnse_adapter::ApiResponse;

/// Prints the raw body when present and non-empty; otherwise a
/// `{"status":…,"body":…}` JSON fallback. Dry runs land in the fallback
/// with both fields null.
pub fn print_response(response: &ApiResponse) {
    println!("{}", render_response(response));
}

fn render_response(response: &ApiResponse) -> String {
    match response.body.as_deref() {
        Some(body) if !body.is_empty() => body.to_string(),
        _ => serde_json::json!({
            "status": response.status,
            "body": response.body,
        })
        .to_string(),
    }
}
