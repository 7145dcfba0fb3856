/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public OKEx v1 REST adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig, Credentials, OkexClient, OkexError, RequestSigner, Result,
    exchange_error_message,
};

// Re-export all types
pub use types::*;
