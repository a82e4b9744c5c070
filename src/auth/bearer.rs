//! Bearer token authentication.
//!
//! [`BearerAuth`] sets a single header, `Authorization: Bearer <token>`, on
//! every request it processes. It has no notion of expiry or refresh; a new
//! token means a new adapter.

use std::fmt;

use reqwest::blocking::Request;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::auth::Authenticator;
use crate::config::BearerToken;
use crate::error::ConfigError;

/// Generic HTTP bearer authentication.
///
/// The header value is computed once at construction and marked sensitive,
/// so the transport redacts it from its own debug output.
///
/// # Security
///
/// The [`Debug`] implementation masks the token:
///
/// ```rust
/// use api_helper::BearerAuth;
///
/// let auth = BearerAuth::new("secret-token").unwrap();
/// assert_eq!(format!("{:?}", auth), "BearerAuth(*****)");
/// ```
///
/// # Example
///
/// ```rust
/// use api_helper::{Authenticator, BearerAuth};
/// use reqwest::blocking::Request;
/// use reqwest::{Method, Url};
///
/// let auth = BearerAuth::new("abc123").unwrap();
/// let request = Request::new(Method::GET, Url::parse("https://example.com/").unwrap());
/// let request = auth.authenticate(request);
///
/// assert_eq!(request.headers()["authorization"], "Bearer abc123");
/// ```
#[derive(Clone)]
pub struct BearerAuth {
    token: BearerToken,
    header: HeaderValue,
}

impl BearerAuth {
    /// Creates a bearer adapter for `token`.
    ///
    /// The token's format is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] if the token contains bytes that
    /// cannot appear in an HTTP header value, such as control characters.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = BearerToken::new(token);
        let mut header = HeaderValue::from_str(&format!("Bearer {}", token.as_ref()))
            .map_err(|_| ConfigError::InvalidToken)?;
        header.set_sensitive(true);

        Ok(Self { token, header })
    }

    /// Returns the wrapped token.
    #[must_use]
    pub const fn token(&self) -> &BearerToken {
        &self.token
    }
}

impl Authenticator for BearerAuth {
    fn authenticate(&self, mut request: Request) -> Request {
        request
            .headers_mut()
            .insert(AUTHORIZATION, self.header.clone());
        request
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerAuth(*****)")
    }
}
