//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL for a session.
///
/// The URL must be absolute and carry a host. Relative request paths are
/// resolved against it with standard reference resolution, so a base URL
/// ending in `/` nests relative paths beneath it, while a path starting with
/// `/` replaces the base path entirely.
///
/// # Serialization
///
/// `BaseUrl` serializes to and deserializes from its string form:
///
/// ```rust
/// use api_helper::BaseUrl;
///
/// let base = BaseUrl::new("https://api.example.com/v1/").unwrap();
/// let json = serde_json::to_string(&base).unwrap();
/// assert_eq!(json, r#""https://api.example.com/v1/""#);
/// ```
///
/// # Example
///
/// ```rust
/// use api_helper::BaseUrl;
///
/// let base = BaseUrl::new("https://example.com").unwrap();
/// assert_eq!(base.join("/x"), "https://example.com/x");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value does not parse as
    /// an absolute URL or has no host.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|_| invalid())?;
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(invalid());
        }
        Ok(Self(parsed))
    }

    /// Resolves `reference` against this base URL.
    ///
    /// Absolute URLs come back unchanged. If resolution fails the reference
    /// is returned as given so the transport reports the problem itself.
    #[must_use]
    pub fn join(&self, reference: &str) -> String {
        self.0
            .join(reference)
            .map_or_else(|_| reference.to_string(), String::from)
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Serialize for BaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An opaque bearer credential.
///
/// The token's format is never inspected. Its `Debug` implementation masks
/// the value so it cannot leak through logs.
///
/// ```rust
/// use api_helper::BearerToken;
///
/// let token = BearerToken::new("abc123");
/// assert_eq!(token.as_ref(), "abc123");
/// assert_eq!(format!("{:?}", token), "BearerToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_https_root() {
        let base = BaseUrl::new("https://example.com").unwrap();
        assert_eq!(base.as_ref(), "https://example.com/");
        assert_eq!(base.as_url().host_str(), Some("example.com"));
    }

    #[test]
    fn test_base_url_trims_whitespace() {
        let base = BaseUrl::new("  http://localhost:8080/api/  ").unwrap();
        assert_eq!(base.as_ref(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_base_url_rejects_relative_path() {
        let result = BaseUrl::new("/just/a/path");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBaseUrl { url }) if url == "/just/a/path"
        ));
    }

    #[test]
    fn test_base_url_rejects_empty() {
        assert!(BaseUrl::new("").is_err());
    }

    #[test]
    fn test_base_url_rejects_non_base_scheme() {
        assert!(BaseUrl::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_join_absolute_path_on_root() {
        let base = BaseUrl::new("https://example.com").unwrap();
        assert_eq!(base.join("/x"), "https://example.com/x");
    }

    #[test]
    fn test_join_relative_path_nests_under_trailing_slash() {
        let base = BaseUrl::new("https://example.com/api/").unwrap();
        assert_eq!(base.join("v1/users"), "https://example.com/api/v1/users");
    }

    #[test]
    fn test_join_relative_path_replaces_last_segment_without_trailing_slash() {
        let base = BaseUrl::new("https://example.com/api").unwrap();
        assert_eq!(base.join("users"), "https://example.com/users");
    }

    #[test]
    fn test_join_leading_slash_replaces_base_path() {
        let base = BaseUrl::new("https://example.com/api/").unwrap();
        assert_eq!(base.join("/health"), "https://example.com/health");
    }

    #[test]
    fn test_join_keeps_absolute_urls() {
        let base = BaseUrl::new("https://example.com/api/").unwrap();
        assert_eq!(
            base.join("https://other.example.org/x?y=1"),
            "https://other.example.org/x?y=1"
        );
    }

    #[test]
    fn test_join_failure_forwards_reference_unchanged() {
        let base = BaseUrl::new("https://example.com/").unwrap();
        assert_eq!(base.join("http://[::1"), "http://[::1");
    }

    #[test]
    fn test_join_keeps_query_string() {
        let base = BaseUrl::new("https://example.com/").unwrap();
        assert_eq!(base.join("items?page=2"), "https://example.com/items?page=2");
    }

    #[test]
    fn test_base_url_deserialize_validates() {
        let ok: BaseUrl = serde_json::from_str(r#""https://example.com/v2/""#).unwrap();
        assert_eq!(ok.as_ref(), "https://example.com/v2/");

        let err = serde_json::from_str::<BaseUrl>(r#""nope""#);
        assert!(err.is_err());
    }

    #[test]
    fn test_bearer_token_debug_is_masked() {
        let token = BearerToken::new("super-secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "BearerToken(*****)");
    }
}
