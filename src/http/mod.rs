/*
[INPUT]:  HTTP submodule definitions
[OUTPUT]: REST client, signing and error types for the v1 API
[POS]:    src/http - module wiring
[UPDATE]: When HTTP submodules change
*/

mod client;
mod error;
mod futures;
mod futures_trade;
mod public;
mod signature;
mod trade;
mod user;

pub use client::{ClientConfig, Credentials, OkexClient};
pub use error::{OkexError, Result, exchange_error_message};
pub use signature::{RequestSigner, canonical_query};
