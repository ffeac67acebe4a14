/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize, Serializer};

use super::enums::Side;

/// Body for order placement and modification. `price_stop` is serialized
/// only when present; the server distinguishes absent from null. Numeric
/// fields go over the wire in their shortest form: `100`, not `100.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub symbol: String,
    #[serde(serialize_with = "compact_number")]
    pub price: f64,
    #[serde(serialize_with = "compact_number")]
    pub quantity: f64,
    pub side: Side,
    pub order_type: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "compact_number_opt"
    )]
    pub price_stop: Option<f64>,
}

/// Integral values serialize as JSON integers, everything else as floats.
fn compact_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn compact_number_opt<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        // `skip_serializing_if` keeps `None` out of the output entirely.
        Some(value) => compact_number(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Optional paging filters for the order history endpoint. Values of zero
/// are meaningful and pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistoryQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub page_size: Option<u32>,
    pub page_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingTokenRequest {
    pub otp_type: String,
    pub passcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailOtpRequest {
    pub email: String,
    pub otp_type: String,
}
