//! Request authentication for API helper sessions.
//!
//! An [`Authenticator`] is handed every outgoing request just before it is
//! sent and returns the request to transmit. This mirrors the way transport
//! libraries expose a per-request auth hook: the adapter may add or rewrite
//! headers, but it never sees the response.
//!
//! # Overview
//!
//! - [`Authenticator`]: the authentication capability a session accepts
//! - [`BearerAuth`]: sets `Authorization: Bearer <token>`
//!
//! Any `Fn(Request) -> Request` closure that is `Send + Sync` is also an
//! authenticator, which covers one-off schemes without a new type.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use api_helper::{ApiHelperConfig, Authenticator, BearerAuth};
//! use reqwest::header::HeaderValue;
//!
//! // Bearer token
//! let config = ApiHelperConfig::builder()
//!     .auth(BearerAuth::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//! assert!(config.auth().is_some());
//!
//! // Custom header scheme from a closure
//! let api_key = |mut request: reqwest::blocking::Request| {
//!     request
//!         .headers_mut()
//!         .insert("x-api-key", HeaderValue::from_static("key-123"));
//!     request
//! };
//! let auth: Arc<dyn Authenticator> = Arc::new(api_key);
//! ```

mod bearer;

pub use bearer::BearerAuth;

use reqwest::blocking::Request;

/// Applies credentials to an outgoing request.
///
/// Implementations must be `Send + Sync` so sessions can be shared across
/// threads. They are invoked once per request, after the caller finished
/// building it and before it is executed.
pub trait Authenticator: Send + Sync {
    /// Returns `request` with credentials attached.
    fn authenticate(&self, request: Request) -> Request;
}

impl<F> Authenticator for F
where
    F: Fn(Request) -> Request + Send + Sync,
{
    fn authenticate(&self, request: Request) -> Request {
        self(request)
    }
}
