//! Error types for the API helper.
//!
//! Only construction can fail with an error defined by this crate. Once a
//! session exists, every request-time failure is the transport's own
//! [`reqwest::Error`], passed through untouched.
//!
//! # Example
//!
//! ```rust
//! use api_helper::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring or constructing a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is not an absolute URL with a host.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme and host (e.g., 'https://api.example.com/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Bearer token contains bytes that cannot be sent in an HTTP header.
    #[error("Bearer token contains characters that are not valid in an HTTP header value.")]
    InvalidToken,

    /// A default header name or value is not valid HTTP.
    #[error("Invalid default header '{name}'. Header names and values must be valid HTTP tokens.")]
    InvalidHeader {
        /// The name of the offending header.
        name: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild {
        /// The transport's description of the failure.
        message: String,
    },
}
