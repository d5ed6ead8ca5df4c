//! Authentication credentials for the GMO Coin API
//!
//! Implements HMAC-SHA256 signing as required by GMO Coin's private
//! endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "API-KEY";
/// Header carrying the request timestamp (milliseconds since epoch)
pub const API_TIMESTAMP_HEADER: &str = "API-TIMESTAMP";
/// Header carrying the request signature (lowercase hex)
pub const API_SIGN_HEADER: &str = "API-SIGN";

/// HMAC-SHA256 digest of `message` keyed by `key`, as lowercase hex.
///
/// Always 64 characters regardless of input length.
pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// Both must be non-empty; private endpoints reject requests signed
    /// with a blank key or secret, so this is caught here instead.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }

        let secret_key = secret_key.into();
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `GMO_API_KEY` and `GMO_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("GMO_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("GMO_API_KEY".to_string()))?;
        let secret_key = std::env::var("GMO_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("GMO_API_SECRET".to_string()))?;

        Self::new(api_key, secret_key)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret
    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }

    /// Split into the raw key and secret
    pub fn into_parts(self) -> (String, SecretString) {
        (self.api_key, self.secret_key)
    }

    /// Sign a request for GMO Coin's API
    ///
    /// The signed text is `timestamp + METHOD + path + body`. Query
    /// parameters are NOT part of the signature; the server verifies
    /// against this exact concatenation, so including them would break
    /// every private GET that carries parameters.
    ///
    /// # Arguments
    /// * `timestamp` - Milliseconds since epoch, base-10 string
    /// * `method` - Upper-case HTTP verb ("GET", "POST")
    /// * `path` - API endpoint path (e.g., "/v1/account/margin")
    /// * `body` - The exact JSON body string sent, or "" for GET
    ///
    /// # Returns
    /// 64-character lowercase hex signature
    pub fn sign(&self, timestamp: &str, method: &str, path: &str, body: &str) -> String {
        let text = format!("{}{}{}{}", timestamp, method, path, body);
        hmac_sha256_hex(self.secret_key.expose_secret().as_bytes(), text.as_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretString with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// The signed header triple attached to one private request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Value for `API-KEY`
    pub api_key: String,
    /// Value for `API-TIMESTAMP`
    pub timestamp: String,
    /// Value for `API-SIGN`
    pub sign: String,
}

/// Request signer for building authenticated requests
///
/// Captures the wall clock once at construction, so every header derived
/// from one signer carries the same timestamp. Two signers created at
/// different times sign the same request differently; that is the
/// anti-replay property the server relies on.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    api_key: &'a str,
    secret_key: &'a SecretString,
    method: &'a str,
    path: &'a str,
    timestamp: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer from credentials
    pub fn new(credentials: &'a Credentials, method: &'a str, path: &'a str) -> Self {
        Self::from_parts(credentials.api_key(), credentials.secret_key(), method, path)
    }

    /// Create a new request signer from a raw key/secret pair
    pub fn from_parts(
        api_key: &'a str,
        secret_key: &'a SecretString,
        method: &'a str,
        path: &'a str,
    ) -> Self {
        Self {
            api_key,
            secret_key,
            method,
            path,
            timestamp: unix_millis(),
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.api_key
    }

    /// Sign the request with the given body
    pub fn sign(&self, body: &str) -> String {
        let text = format!("{}{}{}{}", self.timestamp, self.method, self.path, body);
        hmac_sha256_hex(self.secret_key.expose_secret().as_bytes(), text.as_bytes())
    }

    /// Produce the full header triple for the given body
    pub fn headers(&self, body: &str) -> AuthHeaders {
        AuthHeaders {
            api_key: self.api_key.to_string(),
            timestamp: self.timestamp.clone(),
            sign: self.sign(body),
        }
    }
}

/// Current wall-clock time as a base-10 millisecond string
fn unix_millis() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn test_credentials() -> Credentials {
        Credentials::new("xxxxxxxx", "yyyyyyyy").unwrap()
    }

    #[test]
    fn test_digest_is_64_lowercase_hex() {
        let digest = hmac_sha256_hex(b"test", b"test");
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        // Length is independent of message length
        let long = hmac_sha256_hex(b"test", "x".repeat(10_000).as_bytes());
        assert_eq!(long.len(), 64);
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(
            hmac_sha256_hex(b"key", b"message"),
            hmac_sha256_hex(b"key", b"message")
        );
    }

    #[test]
    fn test_distinct_messages_distinct_digests() {
        let a = hmac_sha256_hex(b"key", b"message-a");
        let b = hmac_sha256_hex(b"key", b"message-b");
        assert_ne!(a, b);

        let other_key = hmac_sha256_hex(b"other", b"message-a");
        assert_ne!(a, other_key);
    }

    #[test]
    fn test_rfc4231_vector() {
        // RFC 4231 test case 2
        let digest = hmac_sha256_hex(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            digest,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_sign_is_reproducible_for_fixed_timestamp() {
        let creds = test_credentials();
        let first = creds.sign("1616492376594", "GET", "/v1/status", "");
        let second = creds.sign("1616492376594", "GET", "/v1/status", "");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_sign_binds_every_component() {
        let creds = test_credentials();
        let base = creds.sign("1616492376594", "GET", "/v1/status", "");

        assert_ne!(base, creds.sign("1616492376595", "GET", "/v1/status", ""));
        assert_ne!(base, creds.sign("1616492376594", "POST", "/v1/status", ""));
        assert_ne!(base, creds.sign("1616492376594", "GET", "/v1/ticker", ""));
        assert_ne!(
            base,
            creds.sign("1616492376594", "GET", "/v1/status", "{\"symbol\":\"BTC\"}")
        );
    }

    #[test]
    fn test_signer_headers_change_over_time() {
        let creds = test_credentials();

        let first = RequestSigner::new(&creds, "GET", "/v1/account/margin").headers("");
        sleep(Duration::from_millis(5));
        let second = RequestSigner::new(&creds, "GET", "/v1/account/margin").headers("");

        assert_eq!(first.api_key, "xxxxxxxx");
        assert_eq!(second.api_key, first.api_key);

        let t1: u128 = first.timestamp.parse().unwrap();
        let t2: u128 = second.timestamp.parse().unwrap();
        assert!(t2 > t1);

        assert_ne!(first.sign, second.sign);
    }

    #[test]
    fn test_signer_body_is_signed() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds, "POST", "/v1/order");

        let body = "{\"symbol\":\"BTC\",\"side\":\"BUY\",\"executionType\":\"LIMIT\",\"price\":\"801000\",\"size\":\"0.001\"}";
        assert_ne!(signer.sign(body), signer.sign(""));
        // Same signer, same body: stable
        assert_eq!(signer.sign(body), signer.sign(body));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("key", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "test_secret_key").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_secret_key"));
        assert!(debug.contains("[REDACTED]"));
    }
}
