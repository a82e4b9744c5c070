//! Per-call request handle.
//!
//! [`ApiRequest`] is what the verb methods on [`ApiHelper`] return. It wraps
//! the transport's own request builder, so every per-call parameter the
//! caller supplies reaches the transport unchanged. Sending goes back through
//! the session, which applies the authenticator and the optional status
//! check.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::{Body, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::clients::ApiHelper;

/// A request being built against an [`ApiHelper`] session.
///
/// The forwarding methods mirror the transport's builder one-for-one. Use
/// [`with`](Self::with) for anything not forwarded here.
///
/// # Example
///
/// ```rust,no_run
/// use api_helper::{ApiHelper, BaseUrl};
/// use serde_json::json;
///
/// let api = ApiHelper::builder()
///     .base_url(BaseUrl::new("https://api.example.com/").unwrap())
///     .connect()
///     .unwrap();
///
/// let response = api
///     .post("items")
///     .query(&[("dry_run", "true")])
///     .header("X-Request-Id", "req-1")
///     .json(&json!({"name": "widget"}))
///     .send()?;
///
/// println!("{}", response.status());
/// # Ok::<(), reqwest::Error>(())
/// ```
#[must_use = "requests do nothing until `send` is called"]
pub struct ApiRequest<'a> {
    helper: &'a ApiHelper,
    builder: RequestBuilder,
}

impl<'a> ApiRequest<'a> {
    pub(crate) const fn new(helper: &'a ApiHelper, builder: RequestBuilder) -> Self {
        Self { helper, builder }
    }

    /// Adds a header to this request.
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Merges a set of headers into this request.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.builder = self.builder.headers(headers);
        self
    }

    /// Appends query parameters to the URL.
    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    /// Sets a raw request body.
    pub fn body<T: Into<Body>>(mut self, body: T) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Sets a JSON body and the matching `Content-Type`.
    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        self.builder = self.builder.json(json);
        self
    }

    /// Sets a url-encoded form body and the matching `Content-Type`.
    pub fn form<T: Serialize + ?Sized>(mut self, form: &T) -> Self {
        self.builder = self.builder.form(form);
        self
    }

    /// Overrides the session timeout for this request only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.builder = self.builder.timeout(timeout);
        self
    }

    /// Sets HTTP basic credentials for this request.
    ///
    /// A session authenticator still runs afterwards and may overwrite them.
    pub fn basic_auth<U: fmt::Display, P: fmt::Display>(
        mut self,
        username: U,
        password: Option<P>,
    ) -> Self {
        self.builder = self.builder.basic_auth(username, password);
        self
    }

    /// Sets a bearer token for this request.
    ///
    /// A session authenticator still runs afterwards and may overwrite it.
    pub fn bearer_auth<T: fmt::Display>(mut self, token: T) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Applies an arbitrary change to the underlying transport builder.
    pub fn with(mut self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self {
        self.builder = f(self.builder);
        self
    }

    /// Builds the request and sends it through the session.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged: malformed URLs and bad
    /// headers surface as builder errors, and connection failures and
    /// timeouts surface as they occur. Status errors are returned only when
    /// the session was configured with `error_for_status`.
    pub fn send(self) -> reqwest::Result<Response> {
        let request = self.builder.build()?;
        self.helper.execute(request)
    }

    #[cfg(test)]
    pub(crate) fn into_builder(self) -> RequestBuilder {
        self.builder
    }
}

impl fmt::Debug for ApiRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}
