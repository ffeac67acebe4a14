/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Signed HTTP requests and raw API responses
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod market;
pub mod order;
pub mod registration;
pub mod request;
pub mod signature;

pub use client::{ApiResponse, ClientConfig, DEFAULT_BASE_URL, DnseClient};
pub use error::{DnseError, Result};
pub use registration::DEFAULT_OTP_TYPE;
pub use request::RequestSpec;
pub use signature::{Algorithm, SIGNED_HEADERS, SignatureResult, build_signature, format_date_header};
