/*
[INPUT]:  HTTP configuration (base URL, timeout, credentials)
[OUTPUT]: Configured reqwest client with request signing and normalization
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::Error as _;
use serde_json::Value;
use tracing::debug;

use crate::http::error::{OkexError, Result};
use crate::http::signature::RequestSigner;
use crate::types::WireParams;

/// Base URL for the v1 REST API
const DEFAULT_BASE_URL: &str = "https://www.okex.com";

/// Default per-request timeout for public endpoints, in milliseconds
const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Request timeout for public GET endpoints. Signed POST endpoints
    /// run without one, matching the upstream protocol.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// Credentials for signed requests, fixed at construction
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

/// Main HTTP client for the OKEx v1 API
#[derive(Debug)]
pub struct OkexClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
    credentials: Option<Credentials>,
}

impl OkexClient {
    /// Create a new client with default configuration and no credentials
    pub fn new() -> Result<Self> {
        Self::build(ClientConfig::default(), None)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a new client with default configuration and credentials
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        Self::build(ClientConfig::default(), Some(credentials))
    }

    /// Create a new client with custom configuration and credentials
    pub fn with_config_and_credentials(
        config: ClientConfig,
        credentials: Credentials,
    ) -> Result<Self> {
        Self::build(config, Some(credentials))
    }

    fn build(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| OkexError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            timeout: config.timeout,
            credentials,
        })
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build the full URL for a v1 endpoint name
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let path = format!("/api/v1/{endpoint}.do");
        Ok(self.base_url.join(&path)?)
    }

    fn require_credentials(&self) -> Result<&Credentials> {
        match &self.credentials {
            Some(credentials)
                if !credentials.api_key.is_empty() && !credentials.secret_key.is_empty() =>
            {
                Ok(credentials)
            }
            Some(_) => Err(OkexError::Config(
                "api_key and secret_key must be non-empty".to_string(),
            )),
            None => Err(OkexError::Config(
                "credentials are required for signed endpoints".to_string(),
            )),
        }
    }

    /// Send a public GET request with the configured timeout
    pub(crate) async fn send_public(&self, endpoint: &str, params: WireParams) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        debug!(endpoint, "sending public request");

        let query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let response = self
            .http_client
            .get(url)
            .query(&query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| OkexError::transport(endpoint, source))?;

        self.normalize(endpoint, response).await
    }

    /// Send a signed POST request as a form-encoded body.
    ///
    /// Caller params are extended with `api_key` and the MD5 `sign` over
    /// the full mapping. No request timeout is applied here.
    pub(crate) async fn send_private(
        &self,
        endpoint: &str,
        mut params: WireParams,
    ) -> Result<Value> {
        let credentials = self.require_credentials()?;
        params.insert("api_key", credentials.api_key.clone());
        let signature = RequestSigner::new(credentials.secret_key.as_str()).sign(&params);
        params.insert("sign", signature);

        let url = self.endpoint_url(endpoint)?;
        debug!(endpoint, "sending signed request");

        let form: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let response = self
            .http_client
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|source| OkexError::transport(endpoint, source))?;

        self.normalize(endpoint, response).await
    }

    /// Turn a raw response into the uniform success/error contract.
    ///
    /// Order: HTTP status outside 2xx wins over body content, then the
    /// body must parse as JSON, then an in-body `error_code` turns an
    /// otherwise successful response into an exchange error.
    async fn normalize(&self, endpoint: &str, response: Response) -> Result<Value> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| OkexError::transport(endpoint, source))?;
        debug!(endpoint, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(OkexError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let payload: Value =
            serde_json::from_str(&body).map_err(|source| OkexError::malformed(endpoint, source))?;

        match payload.get("error_code") {
            None => Ok(payload),
            Some(code) => Err(OkexError::exchange(extract_error_code(endpoint, code)?)),
        }
    }
}

/// Pull the integer out of an `error_code` value, accepting a JSON number
/// or a string holding digits
fn extract_error_code(endpoint: &str, value: &Value) -> Result<i64> {
    let code = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.parse::<i64>().ok(),
        _ => None,
    };
    code.ok_or_else(|| {
        let detail = format!("error_code is not an integer: {value}");
        OkexError::malformed(endpoint, serde_json::Error::custom(detail))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.okex.com");
        assert_eq!(config.timeout, Duration::from_millis(20_000));
    }

    #[test]
    fn test_endpoint_url() {
        let client = OkexClient::new().unwrap();
        let url = client.endpoint_url("ticker").unwrap();
        assert_eq!(url.as_str(), "https://www.okex.com/api/v1/ticker.do");
    }

    #[test]
    fn test_endpoint_url_custom_base() {
        let client = OkexClient::with_config(ClientConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        let url = client.endpoint_url("future_ticker").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/api/v1/future_ticker.do");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = OkexClient::with_config(ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(OkexError::UrlParse(_))));
    }

    #[test]
    fn test_require_credentials_missing() {
        let client = OkexClient::new().unwrap();
        assert!(matches!(
            client.require_credentials(),
            Err(OkexError::Config(_))
        ));
    }

    #[test]
    fn test_require_credentials_empty_secret() {
        let client = OkexClient::with_credentials(Credentials::new("key", "")).unwrap();
        assert!(matches!(
            client.require_credentials(),
            Err(OkexError::Config(_))
        ));
    }

    #[test]
    fn test_require_credentials_present() {
        let client = OkexClient::with_credentials(Credentials::new("key", "secret")).unwrap();
        let credentials = client.require_credentials().unwrap();
        assert_eq!(credentials.api_key, "key");
    }

    #[test]
    fn test_extract_error_code_forms() {
        assert_eq!(extract_error_code("t", &json!(10007)).unwrap(), 10007);
        assert_eq!(extract_error_code("t", &json!("20024")).unwrap(), 20024);
        assert!(matches!(
            extract_error_code("t", &json!("not a number")),
            Err(OkexError::MalformedResponse { .. })
        ));
        assert!(matches!(
            extract_error_code("t", &json!({"nested": true})),
            Err(OkexError::MalformedResponse { .. })
        ));
    }
}
