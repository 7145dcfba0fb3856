/*
[INPUT]:  Error sources (transport, HTTP status, body parsing, exchange codes)
[OUTPUT]: Structured error types plus the fixed v1 code-to-message table
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or extending the code table
*/

use thiserror::Error;

/// Main error type for the OKEx v1 adapter
#[derive(Error, Debug)]
pub enum OkexError {
    /// Network-level failure (connect, DNS, timeout, body read)
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a status outside the 2xx range
    #[error("HTTP {status} from {endpoint}")]
    Http { status: u16, endpoint: String },

    /// Body was not parseable as JSON, or carried a non-numeric error_code
    #[error("Malformed response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Exchange rejected the call with a v1 error code in the body
    #[error("Exchange error {code}: {message}")]
    Exchange { code: i64, message: String },

    /// Serialization of request data failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OkexError {
    /// Create a transport error tagged with the endpoint that was called
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        OkexError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a malformed-response error tagged with the endpoint
    pub fn malformed(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        OkexError::MalformedResponse {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an exchange error, resolving the message from the fixed table
    pub fn exchange(code: i64) -> Self {
        OkexError::Exchange {
            code,
            message: exchange_error_message(code),
        }
    }

    /// Check if the error came back as an in-body exchange code
    pub fn is_exchange_error(&self) -> bool {
        matches!(self, OkexError::Exchange { .. })
    }

    /// Check if the error indicates a credential or signature problem
    pub fn is_auth_error(&self) -> bool {
        match self {
            OkexError::Exchange { code, .. } => {
                matches!(code, 10005 | 10006 | 10007 | 10017 | 20020 | 20024)
            }
            OkexError::Config(_) => true,
            _ => false,
        }
    }

    /// Exchange error code, if this is an in-body exchange error
    pub fn error_code(&self) -> Option<i64> {
        match self {
            OkexError::Exchange { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status code, if this is a bad-status error
    pub fn status(&self) -> Option<u16> {
        match self {
            OkexError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Look up the fixed v1 message for an exchange error code.
///
/// The v1 API reports failures as a bare `error_code` with no message; the
/// enumeration below is the documented spot (10xxx) and futures (20xxx)
/// table. Codes outside it render as `Unknown error code {code}`.
pub fn exchange_error_message(code: i64) -> String {
    let known = match code {
        10000 => "Required parameter can not be null",
        10001 => "Requests too frequent",
        10002 => "System error",
        10003 => "Restricted list request, please try again later",
        10004 => "IP restriction",
        10005 => "Secret key does not exist",
        10006 => "User does not exist",
        10007 => "Signatures do not match",
        10008 => "Illegal parameter",
        10009 => "Order does not exist",
        10010 => "Insufficient balance",
        10011 => "Order is less than minimum trade amount",
        10012 => "Unsupported symbol (not btc_usd or ltc_usd)",
        10013 => "This interface only accepts https requests",
        10014 => "Order price must be between 0 and 1,000,000",
        10015 => "Order price differs from current market price too much",
        10016 => "Insufficient coins balance",
        10017 => "API authorization error",
        10018 => "Borrow amount less than lower limit",
        10019 => "Loan agreement not checked",
        10100 => "User account frozen",
        10216 => "Non-available API",
        20001 => "User does not exist",
        20002 => "Account frozen",
        20003 => "Account frozen due to forced liquidation",
        20004 => "Contract account frozen",
        20005 => "User contract account does not exist",
        20006 => "Required field missing",
        20007 => "Illegal parameter",
        20008 => "Contract account balance too low",
        20009 => "Contract status error",
        20010 => "Risk rate information does not exist",
        20011 => "Risk rate bigger than 90% before opening position",
        20012 => "Risk rate bigger than 90% after opening position",
        20013 => "Temporally no counter party price",
        20014 => "System error",
        20015 => "Order does not exist",
        20016 => "Close amount bigger than your open positions",
        20017 => "Not authorized/illegal operation",
        20018 => "Order price differs more than 5% from the price of the last minute",
        20019 => "IP restricted from accessing the resource",
        20020 => "Secret key does not exist",
        20021 => "Index information does not exist",
        20022 => "Wrong API interface for this margin mode",
        20023 => "Account in fixed-margin mode",
        20024 => "Signature does not match",
        20025 => "Leverage rate error",
        503 => "Too many requests (Http)",
        _ => return format!("Unknown error code {code}"),
    };
    known.to_string()
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, OkexError>;
