//! Base-URL session over the blocking reqwest client.
//!
//! This module provides the [`ApiHelper`] type: one transport session, an
//! optional base URL, an optional authenticator, and a lifecycle that
//! releases the session exactly once.

use reqwest::blocking::{Client, Request, Response};
use reqwest::Method;

use crate::clients::request::ApiRequest;
use crate::config::{ApiHelperConfig, ApiHelperConfigBuilder, BaseUrl};
use crate::error::ConfigError;

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A session that forwards HTTP verb calls to the transport.
///
/// The session handles:
/// - Resolving relative paths against the configured base URL
/// - Applying the configured authenticator to every request
/// - Optionally converting 4xx/5xx responses into transport errors
/// - Releasing the transport session exactly once
///
/// Everything else is the transport's business. Arguments reach it
/// unchanged, and responses and errors come back unchanged.
///
/// # Lifecycle
///
/// A session is released by whichever happens first: [`close`](Self::close),
/// the end of [`scoped`](Self::scoped), or `Drop`. Release runs the
/// configured close hook once; later attempts are no-ops.
///
/// # Thread Safety
///
/// `ApiHelper` is `Send + Sync`; verb methods take `&self`.
///
/// # Example
///
/// ```rust,no_run
/// use api_helper::{ApiHelper, BaseUrl, BearerAuth};
///
/// let api = ApiHelper::builder()
///     .base_url(BaseUrl::new("https://example.com").unwrap())
///     .auth(BearerAuth::new("abc123").unwrap())
///     .connect()
///     .unwrap();
///
/// let status = api.scoped(|api| {
///     let response = api.get("/x").send()?;
///     Ok::<_, reqwest::Error>(response.status())
/// })?;
/// # Ok::<(), reqwest::Error>(())
/// ```
pub struct ApiHelper {
    client: Client,
    config: ApiHelperConfig,
    closed: bool,
}

// Verify ApiHelper is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiHelper>();
};

impl ApiHelper {
    /// Opens a session from `config`.
    ///
    /// The transport timeout is exactly what the config says. With no
    /// timeout configured, requests wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if a default header cannot be
    /// encoded, or [`ConfigError::ClientBuild`] if the transport client
    /// cannot be created.
    pub fn new(config: ApiHelperConfig) -> Result<Self, ConfigError> {
        let user_agent = config.user_agent_prefix().map_or_else(
            || format!("api-helper v{VERSION}"),
            |prefix| format!("{prefix} | api-helper v{VERSION}"),
        );

        let headers = config.header_map()?;

        let client = Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ConfigError::ClientBuild {
                message: e.to_string(),
            })?;

        tracing::debug!(
            base_url = config.base_url().map(|base| base.as_url().as_str()),
            auth = config.auth().is_some(),
            "opened API session"
        );

        Ok(Self {
            client,
            config,
            closed: false,
        })
    }

    /// Creates a new builder for the session's configuration.
    ///
    /// Finish with [`ApiHelperConfigBuilder::connect`] to open the session.
    #[must_use]
    pub fn builder() -> ApiHelperConfigBuilder {
        ApiHelperConfig::builder()
    }

    /// Returns the configuration this session was opened with.
    #[must_use]
    pub const fn config(&self) -> &ApiHelperConfig {
        &self.config
    }

    /// Returns the base URL, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.config.base_url()
    }

    /// Returns the underlying transport client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Resolves `url` against the base URL.
    ///
    /// Without a base URL the string is returned as given.
    #[must_use]
    pub fn resolve_url(&self, url: &str) -> String {
        self.config
            .base_url()
            .map_or_else(|| url.to_string(), |base| base.join(url))
    }

    /// Starts a request with an arbitrary method.
    ///
    /// `url` may be a `&str`, a `String` or a [`reqwest::Url`].
    pub fn request(&self, method: Method, url: impl AsRef<str>) -> ApiRequest<'_> {
        let url = self.resolve_url(url.as_ref());
        ApiRequest::new(self, self.client.request(method, url))
    }

    /// Starts a `GET` request.
    pub fn get(&self, url: impl AsRef<str>) -> ApiRequest<'_> {
        self.request(Method::GET, url)
    }

    /// Starts an `OPTIONS` request.
    pub fn options(&self, url: impl AsRef<str>) -> ApiRequest<'_> {
        self.request(Method::OPTIONS, url)
    }

    /// Starts a `HEAD` request.
    pub fn head(&self, url: impl AsRef<str>) -> ApiRequest<'_> {
        self.request(Method::HEAD, url)
    }

    /// Starts a `POST` request.
    pub fn post(&self, url: impl AsRef<str>) -> ApiRequest<'_> {
        self.request(Method::POST, url)
    }

    /// Starts a `PUT` request.
    pub fn put(&self, url: impl AsRef<str>) -> ApiRequest<'_> {
        self.request(Method::PUT, url)
    }

    /// Starts a `PATCH` request.
    pub fn patch(&self, url: impl AsRef<str>) -> ApiRequest<'_> {
        self.request(Method::PATCH, url)
    }

    /// Starts a `DELETE` request.
    pub fn delete(&self, url: impl AsRef<str>) -> ApiRequest<'_> {
        self.request(Method::DELETE, url)
    }

    /// Sends a fully built transport request through this session.
    ///
    /// The authenticator runs first. The request's URL is used as is; the
    /// base URL only applies to requests started from the verb methods.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged. With `error_for_status`
    /// enabled, 4xx/5xx responses also come back as the transport's status
    /// error.
    pub fn execute(&self, request: Request) -> reqwest::Result<Response> {
        let request = match self.config.auth() {
            Some(auth) => auth.authenticate(request),
            None => request,
        };

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.client.execute(request)?;
        if self.config.error_for_status() {
            response.error_for_status()
        } else {
            Ok(response)
        }
    }

    /// Runs `body` against this session, then closes it.
    ///
    /// The body's result is returned unchanged. The session is closed
    /// whether the body returns `Ok` or `Err`. If the body panics, the
    /// session is released while unwinding.
    ///
    /// # Errors
    ///
    /// Returns whatever error `body` returns.
    pub fn scoped<T, E, F>(self, body: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
    {
        let result = body(&self);
        self.close();
        result
    }

    /// Closes the session, releasing the transport client.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        tracing::debug!(
            base_url = self.config.base_url().map(|base| base.as_url().as_str()),
            "closing API session"
        );

        if let Some(hook) = self.config.on_close() {
            hook();
        }
    }
}

impl Drop for ApiHelper {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ApiHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiHelper")
            .field("config", &self.config)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
