//! # API Helper
//!
//! A base-URL session with pluggable authentication on top of the blocking
//! [`reqwest`] client.
//!
//! ## Overview
//!
//! This crate provides:
//! - A session, [`ApiHelper`], optionally scoped to a [`BaseUrl`]
//! - One method per HTTP verb (`get`, `options`, `head`, `post`, `put`,
//!   `patch`, `delete`) that forwards to the transport unchanged
//! - A pluggable [`Authenticator`], with [`BearerAuth`] for bearer tokens
//! - A scoped lifecycle that releases the session exactly once
//!
//! It does not retry, rate limit or reinterpret responses. Transport errors
//! reach the caller as [`reqwest::Error`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use api_helper::{ApiHelper, BaseUrl, BearerAuth};
//!
//! let api = ApiHelper::builder()
//!     .base_url(BaseUrl::new("https://example.com").unwrap())
//!     .auth(BearerAuth::new("abc123").unwrap())
//!     .connect()
//!     .unwrap();
//!
//! // GET https://example.com/x with "Authorization: Bearer abc123"
//! api.scoped(|api| {
//!     let response = api.get("/x").send()?;
//!     println!("{}", response.status());
//!     Ok::<_, reqwest::Error>(())
//! })?;
//! # Ok::<(), reqwest::Error>(())
//! ```
//!
//! ## Design Principles
//!
//! - **Pass-through**: Per-call arguments, responses and errors are the
//!   transport's own
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Base URLs, tokens and default headers are
//!   checked on construction
//! - **Deterministic release**: Sessions close exactly once, on success,
//!   error or panic

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{Authenticator, BearerAuth};
pub use clients::{ApiHelper, ApiRequest, VERSION};
pub use config::{ApiHelperConfig, ApiHelperConfigBuilder, BaseUrl, BearerToken, CloseHook};
pub use error::ConfigError;
