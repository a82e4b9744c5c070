//! Session types for forwarding HTTP calls to the transport.
//!
//! # Overview
//!
//! - [`ApiHelper`]: The session: base URL, authenticator, lifecycle
//! - [`ApiRequest`]: A request being built, returned by the verb methods
//!
//! # Example
//!
//! ```rust,no_run
//! use api_helper::{ApiHelper, BaseUrl, BearerAuth};
//!
//! let api = ApiHelper::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/").unwrap())
//!     .auth(BearerAuth::new("abc123").unwrap())
//!     .connect()
//!     .unwrap();
//!
//! let response = api.get("users").query(&[("page", "2")]).send()?;
//! let created = api.post("users").json(&serde_json::json!({"name": "ada"})).send()?;
//! api.close();
//! # Ok::<(), reqwest::Error>(())
//! ```
//!
//! # Errors
//!
//! Request failures are the transport's [`reqwest::Error`], untouched.
//! Status codes are not interpreted unless the session was configured with
//! `error_for_status(true)`.

mod api_helper;
mod request;

pub use api_helper::{ApiHelper, VERSION};
pub use request::ApiRequest;
