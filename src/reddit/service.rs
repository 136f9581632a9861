// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit's OAuth endpoints.

use crate::http::{HTTPClientFactory, HTTPError, HTTPResult};
use crate::reddit::auth::BearerToken;
use log::debug;
use reqwest::{Client, StatusCode, header};

/// Base URL for authenticated Reddit API requests.
pub const API_BASE_URL: &str = "https://oauth.reddit.com";

/// A service for retrieving a Redditor's comments.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Requests one page of `username`'s comments and returns the raw body.
    ///
    /// `after` is the cursor returned with the previous page; an empty
    /// cursor requests the newest comments. At most `limit` comments are
    /// returned.
    fn get_comments(
        &self,
        token: &BearerToken,
        username: &str,
        after: &str,
        limit: usize,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
    base_url: String,
}

impl RedditService {
    /// Creates a new Reddit service using a client from `factory`.
    pub fn new(factory: &HTTPClientFactory) -> HTTPResult<Self> {
        let client = factory.create()?;
        let base_url = String::from(API_BASE_URL);
        Ok(Self { client, base_url })
    }

    /// Sends requests to `base_url` instead of [`API_BASE_URL`].
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url, ..self }
    }

    fn uri(&self, username: &str) -> String {
        format!("{}/user/{username}/comments", self.base_url)
    }

    fn query(&self, after: &str, limit: usize) -> Vec<(&'static str, String)> {
        let mut query = vec![("limit", limit.to_string())];
        if !after.is_empty() {
            query.push(("after", after.to_string()));
        }
        query
    }
}

impl Service for RedditService {
    async fn get_comments(
        &self,
        token: &BearerToken,
        username: &str,
        after: &str,
        limit: usize,
    ) -> HTTPResult<String> {
        let resp = self
            .client
            .get(self.uri(username))
            .query(&self.query(after, limit))
            .header(header::AUTHORIZATION, token.header_value())
            .send()
            .await?;

        let status = resp.status();
        debug!("Got response code: {status}");
        if status != StatusCode::OK {
            Err(HTTPError::Http(status))
        } else {
            Ok(resp.text().await?)
        }
    }
}
