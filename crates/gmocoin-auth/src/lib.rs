//! Authentication for the GMO Coin private API
//!
//! This crate produces the `API-KEY` / `API-TIMESTAMP` / `API-SIGN` header
//! triple that GMO Coin requires on private endpoints. Signing is a pure
//! computation: the only ambient input is the wall clock, read once when a
//! [`RequestSigner`] is created.
//!
//! # Example
//!
//! ```no_run
//! use gmocoin_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from GMO_API_KEY / GMO_API_SECRET
//!     let creds = Credentials::from_env()?;
//!
//!     // Sign one request
//!     let signer = RequestSigner::new(&creds, "GET", "/v1/account/margin");
//!     let headers = signer.headers("");
//!     println!("API-SIGN: {}", headers.sign);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{
    hmac_sha256_hex, AuthHeaders, Credentials, RequestSigner, API_KEY_HEADER,
    API_SIGN_HEADER, API_TIMESTAMP_HEADER,
};
pub use error::{AuthError, AuthResult};
