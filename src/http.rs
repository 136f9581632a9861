// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder};
use thiserror::Error;

/// Builds HTTP clients that identify themselves with a fixed user agent.
///
/// Reddit rejects or heavily throttles requests that do not carry a
/// descriptive user agent, so every client used to talk to it should
/// come from a factory.
#[derive(Clone, Debug)]
pub struct HTTPClientFactory {
    user_agent: String,
}

impl HTTPClientFactory {
    /// Creates a new factory for clients sending `user_agent`.
    pub fn new(user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        Self { user_agent }
    }

    /// The user agent sent by every client this factory creates.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates a new HTTP client.
    ///
    /// According to the reqwest docs, this only fails if a TLS backend or
    /// the DNS resolver cannot be initialized.
    pub fn create(&self) -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(&self.user_agent)
            .build()
            .map_err(HTTPError::Client)
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An HTTP client could not be constructed.
    #[error("Could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// An error that occurred while making an HTTP request or reading its body.
    #[error("Error while making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(reqwest::StatusCode),

    /// A response body that could not be parsed as the expected JSON.
    #[error("Could not parse response body: {0}")]
    Body(#[from] serde_json::Error),
}
