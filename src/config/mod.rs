//! Configuration types for API helper sessions.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiHelperConfig`]: The immutable settings a session is built from
//! - [`ApiHelperConfigBuilder`]: A builder for constructing [`ApiHelperConfig`] instances
//! - [`BaseUrl`]: A validated base URL that relative paths resolve against
//! - [`BearerToken`]: An opaque credential with masked debug output
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use api_helper::{ApiHelperConfig, BaseUrl, BearerAuth};
//!
//! let config = ApiHelperConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/v1/").unwrap())
//!     .auth(BearerAuth::new("abc123").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().unwrap().as_ref(), "https://api.example.com/v1/");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, BearerToken};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::Authenticator;
use crate::clients::ApiHelper;
use crate::error::ConfigError;

/// Callback invoked once when a session is released.
pub type CloseHook = Arc<dyn Fn() + Send + Sync>;

/// Settings for an [`ApiHelper`] session.
///
/// Every field is optional. A default config produces a plain session that
/// forwards requests exactly as given, with no base URL, no credentials and
/// no timeouts.
///
/// # Thread Safety
///
/// `ApiHelperConfig` is `Clone`, `Send`, and `Sync`. Cloning shares the
/// authenticator and close hook rather than duplicating them.
#[derive(Clone, Default)]
pub struct ApiHelperConfig {
    base_url: Option<BaseUrl>,
    auth: Option<Arc<dyn Authenticator>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    default_headers: HashMap<String, String>,
    error_for_status: bool,
    on_close: Option<CloseHook>,
}

impl ApiHelperConfig {
    /// Creates a new builder for constructing an `ApiHelperConfig`.
    #[must_use]
    pub fn builder() -> ApiHelperConfigBuilder {
        ApiHelperConfigBuilder::new()
    }

    /// Returns the base URL, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Returns the authenticator, if configured.
    #[must_use]
    pub fn auth(&self) -> Option<&Arc<dyn Authenticator>> {
        self.auth.as_ref()
    }

    /// Returns the whole-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the connect timeout, if configured.
    #[must_use]
    pub const fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns whether 4xx/5xx responses are turned into transport errors.
    #[must_use]
    pub const fn error_for_status(&self) -> bool {
        self.error_for_status
    }

    pub(crate) fn on_close(&self) -> Option<&CloseHook> {
        self.on_close.as_ref()
    }

    /// Encodes the default headers for the transport.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let invalid = || ConfigError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

impl fmt::Debug for ApiHelperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiHelperConfig")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth.as_ref().map(|_| "*****"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("default_headers", &self.default_headers.keys())
            .field("error_for_status", &self.error_for_status)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

// Verify ApiHelperConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiHelperConfig>();
};

/// Builder for constructing [`ApiHelperConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `None` (URLs are sent as given)
/// - `auth`: `None` (no `Authorization` header is added)
/// - `timeout` / `connect_timeout`: `None` (wait indefinitely)
/// - `user_agent_prefix`: `None`
/// - `default_headers`: empty
/// - `error_for_status`: `false`
///
/// # Example
///
/// ```rust
/// use api_helper::{ApiHelperConfig, BaseUrl};
///
/// let config = ApiHelperConfig::builder()
///     .base_url(BaseUrl::new("https://example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .default_header("Accept", "application/json")
///     .error_for_status(true)
///     .build()
///     .unwrap();
///
/// assert!(config.error_for_status());
/// ```
#[derive(Default)]
pub struct ApiHelperConfigBuilder {
    config: ApiHelperConfig,
}

impl ApiHelperConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL relative request paths are resolved against.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    /// Sets the authenticator applied to every outgoing request.
    #[must_use]
    pub fn auth(mut self, auth: impl Authenticator + 'static) -> Self {
        self.config.auth = Some(Arc::new(auth));
        self
    }

    /// Sets an already shared authenticator.
    #[must_use]
    pub fn shared_auth(mut self, auth: Arc<dyn Authenticator>) -> Self {
        self.config.auth = Some(auth);
        self
    }

    /// Sets the whole-request timeout handed to the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout handed to the transport.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .default_headers
            .insert(name.into(), value.into());
        self
    }

    /// Turns 4xx/5xx responses into the transport's status error.
    #[must_use]
    pub const fn error_for_status(mut self, enabled: bool) -> Self {
        self.config.error_for_status = enabled;
        self
    }

    /// Registers a callback run once when the session is released.
    #[must_use]
    pub fn on_close(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.config.on_close = Some(Arc::new(hook));
        self
    }

    /// Builds the [`ApiHelperConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if a default header name or
    /// value cannot be sent over HTTP.
    pub fn build(self) -> Result<ApiHelperConfig, ConfigError> {
        self.config.header_map()?;
        Ok(self.config)
    }

    /// Builds the config and opens a session from it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`build`](Self::build) or [`ApiHelper::new`].
    pub fn connect(self) -> Result<ApiHelper, ConfigError> {
        ApiHelper::new(self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BearerAuth;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ApiHelperConfig::builder().build().unwrap();

        assert!(config.base_url().is_none());
        assert!(config.auth().is_none());
        assert!(config.timeout().is_none());
        assert!(config.connect_timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.default_headers().is_empty());
        assert!(!config.error_for_status());
        assert!(config.on_close().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base = BaseUrl::new("https://api.example.com/").unwrap();

        let config = ApiHelperConfig::builder()
            .base_url(base.clone())
            .auth(BearerAuth::new("abc123").unwrap())
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .user_agent_prefix("MyApp/1.0")
            .default_header("Accept", "application/json")
            .error_for_status(true)
            .on_close(|| {})
            .build()
            .unwrap();

        assert_eq!(config.base_url(), Some(&base));
        assert!(config.auth().is_some());
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.connect_timeout(), Some(Duration::from_secs(2)));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(
            config.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
        assert!(config.error_for_status());
        assert!(config.on_close().is_some());
    }

    #[test]
    fn test_builder_rejects_empty_header_name() {
        let result = ApiHelperConfig::builder().default_header("", "x").build();
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn test_builder_rejects_header_name_with_space() {
        let result = ApiHelperConfig::builder()
            .default_header("X Bad", "value")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeader { name }) if name == "X Bad"
        ));
    }

    #[test]
    fn test_builder_rejects_header_value_with_newline() {
        let result = ApiHelperConfig::builder()
            .default_header("X-Bad", "line\nbreak")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeader { name }) if name == "X-Bad"
        ));
    }

    #[test]
    fn test_header_map_encodes_valid_headers() {
        let config = ApiHelperConfig::builder()
            .default_header("Accept", "application/json")
            .build()
            .unwrap();

        let headers = config.header_map().unwrap();
        assert_eq!(headers["accept"], "application/json");
    }

    #[test]
    fn test_shared_auth_is_not_duplicated() {
        let auth: Arc<dyn Authenticator> = Arc::new(BearerAuth::new("abc123").unwrap());
        let config = ApiHelperConfig::builder()
            .shared_auth(Arc::clone(&auth))
            .build()
            .unwrap();

        assert!(Arc::ptr_eq(config.auth().unwrap(), &auth));
    }

    #[test]
    fn test_clone_shares_close_hook() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = ApiHelperConfig::builder()
            .on_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        let cloned = config.clone();
        (config.on_close().unwrap())();
        (cloned.on_close().unwrap())();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let config = ApiHelperConfig::builder()
            .auth(BearerAuth::new("very-secret").unwrap())
            .default_header("X-Api-Key", "also-secret")
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ApiHelperConfig"));
        assert!(!debug_str.contains("very-secret"));
        assert!(!debug_str.contains("also-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiHelperConfig>();
    }
}
