/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for okex-v1-adapter tests

use okex_v1_adapter::{ClientConfig, Credentials, OkexClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "c821db84-6fbd-11e4-a9e3-c86000d26d7c";
pub const TEST_SECRET_KEY: &str = "secret123";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    }
}

/// Client pointed at the mock server, without credentials
pub fn public_client(server: &MockServer) -> OkexClient {
    OkexClient::with_config(mock_config(server)).expect("client init")
}

/// Client pointed at the mock server, with test credentials
#[allow(dead_code)]
pub fn signed_client(server: &MockServer) -> OkexClient {
    OkexClient::with_config_and_credentials(
        mock_config(server),
        Credentials::new(TEST_API_KEY, TEST_SECRET_KEY),
    )
    .expect("client init")
}

/// Decode a form-urlencoded POST body into (key, value) pairs
#[allow(dead_code)]
pub fn decode_form_body(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// Recompute the v1 signature over captured form fields, excluding `sign`.
///
/// Independent of the crate's signer: sorts the pairs, joins them as
/// `key=value` with `&`, appends `&secret_key={secret}` and MD5-digests.
#[allow(dead_code)]
pub fn recompute_signature(fields: &[(String, String)], secret: &str) -> String {
    use md5::{Digest, Md5};

    let mut sorted: Vec<&(String, String)> =
        fields.iter().filter(|(key, _)| key != "sign").collect();
    sorted.sort();
    let canonical = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    let message = format!("{canonical}&secret_key={secret}");
    hex::encode_upper(Md5::digest(message.as_bytes()))
}
