/*
[INPUT]:  Request parameters and the account secret key
[OUTPUT]: Uppercase-hex MD5 signature for the sign form field
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or canonical format
*/

use md5::{Digest, Md5};

use crate::types::WireParams;

/// Join request parameters into the canonical string the signature covers.
///
/// Keys are emitted in ascending byte order as `key=value` pairs joined by
/// `&`. Values are taken verbatim, with no URL escaping; a value containing
/// `&` or `=` is ambiguous on the wire, matching the exchange's own signing
/// rules. An empty map yields an empty string.
pub fn canonical_query(params: &WireParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs request parameters for authenticated endpoints
#[derive(Clone)]
pub struct RequestSigner {
    secret_key: String,
}

impl RequestSigner {
    /// Create a new request signer with the given secret key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    /// Sign request parameters according to the v1 API rules
    ///
    /// Format: MD5 of "{canonical_query}&secret_key={secret}"
    /// Returns a 32-character uppercase hex digest
    pub fn sign(&self, params: &WireParams) -> String {
        let mut message = canonical_query(params);
        message.push_str("&secret_key=");
        message.push_str(&self.secret_key);

        let mut hasher = Md5::new();
        hasher.update(message.as_bytes());
        hex::encode_upper(hasher.finalize())
    }
}
