/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public DNSE OpenAPI adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    Algorithm,
    ApiResponse,
    ClientConfig,
    DEFAULT_BASE_URL,
    DEFAULT_OTP_TYPE,
    DnseClient,
    DnseError,
    RequestSpec,
    Result,
};

// Re-export all types
pub use types::*;
