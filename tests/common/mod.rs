//! Shared helpers for integration tests.
//!
//! The blocking client must not run inside an async context, so each test
//! keeps its own tokio runtime for driving the mock server and calls the
//! session from the plain test thread.

#![allow(dead_code)]

use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

/// A mock HTTP server paired with the runtime that drives it.
pub struct TestServer {
    // Dropped before the runtime.
    server: MockServer,
    runtime: Runtime,
}

impl TestServer {
    /// Starts a fresh mock server.
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Mounts a mock on the server.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Returns the server root, e.g. `http://127.0.0.1:54321`.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Returns every request the server has seen.
    pub fn received_requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Panics if any mounted expectation is unmet.
    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}
