// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! OAuth2 authentication against the Reddit API.
//!
//! Reddit "script" apps may use the resource owner password grant: the
//! application's client ID and secret are sent as HTTP Basic credentials,
//! and the account's username and password are sent in the form body.
//! The response contains a short-lived bearer token.

use crate::conf::Credentials;
use crate::http::{HTTPClientFactory, HTTPError, HTTPResult};
use log::info;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Endpoint that exchanges credentials for a bearer token.
pub const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// A short-lived OAuth2 access token authorizing API requests.
#[derive(Clone, PartialEq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw access token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header carrying this token.
    ///
    /// ```
    /// use reddit_history::reddit::auth::BearerToken;
    /// let token = BearerToken::new("abc");
    /// assert_eq!(token.header_value(), "bearer abc");
    /// ```
    pub fn header_value(&self) -> String {
        format!("bearer {}", self.0)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken(<redacted>)")
    }
}

/// Something that can hand out bearer tokens.
///
/// Using this trait, callers can swap the real token exchange for a
/// canned token when testing.
pub trait AuthProvider {
    /// Obtains a bearer token for the configured account.
    fn bearer_token(&self) -> impl Future<Output = AuthResult<BearerToken>> + Send;
}

/// Obtains tokens using the OAuth2 password grant.
#[derive(Debug)]
pub struct PasswordGrant {
    client: Client,
    credentials: Credentials,
    token_url: String,
}

impl PasswordGrant {
    /// Creates a new provider for `credentials`, using a client from `factory`.
    pub fn new(factory: &HTTPClientFactory, credentials: Credentials) -> HTTPResult<Self> {
        let client = factory.create()?;
        Ok(Self {
            client,
            credentials,
            token_url: String::from(TOKEN_URL),
        })
    }

    /// Requests tokens from `token_url` instead of [`TOKEN_URL`].
    pub fn with_token_url(self, token_url: impl Into<String>) -> Self {
        let token_url = token_url.into();
        Self { token_url, ..self }
    }

    fn form(&self) -> [(&'static str, &str); 4] {
        [
            ("grant_type", "password"),
            ("username", self.credentials.username()),
            ("password", self.credentials.password()),
            ("redirect_url", self.credentials.redirect_url()),
        ]
    }
}

impl AuthProvider for PasswordGrant {
    async fn bearer_token(&self) -> AuthResult<BearerToken> {
        info!("Requesting bearer token");

        let resp = self
            .client
            .post(&self.token_url)
            .basic_auth(
                self.credentials.client_id(),
                Some(self.credentials.client_secret()),
            )
            .form(&self.form())
            .send()
            .await
            .map_err(HTTPError::from)?;

        let status = resp.status();
        info!("Bearer token response code: {status}");
        if status != StatusCode::OK {
            return Err(AuthError::Service(HTTPError::Http(status)));
        }

        let body = resp.text().await.map_err(HTTPError::from)?;
        let token = parse_token(&body)?;
        info!("Received bearer token");
        Ok(token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Extracts the access token from a token endpoint response body.
fn parse_token(body: &str) -> AuthResult<BearerToken> {
    let resp: TokenResponse = serde_json::from_str(body).map_err(HTTPError::from)?;
    resp.access_token
        .filter(|token| !token.is_empty())
        .map(BearerToken::new)
        .ok_or(AuthError::MissingToken)
}

/// Standard result type for authentication.
pub type AuthResult<T> = Result<T, AuthError>;

/// Indicates that a bearer token could not be obtained.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint could not be reached or rejected the request.
    #[error("Token request failed: {0}")]
    Service(#[from] HTTPError),

    /// The token endpoint responded without an access token.
    #[error("Token response did not contain an access token")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{do_logging, load_data};
    use wiremock::matchers::{basic_auth, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn grant() -> PasswordGrant {
        let credentials = Credentials::from_lookup(|name| match name {
            Credentials::REDDIT_USERNAME => Some(String::from("testuserpleaseignore")),
            Credentials::REDDIT_PASSWORD => Some(String::from("hunter2")),
            Credentials::REDIRECT_URL => Some(String::from("http://localhost:8080")),
            _ => Some(String::from("value")),
        })
        .unwrap();
        let factory = HTTPClientFactory::new("reddit-history-test");
        PasswordGrant::new(&factory, credentials).unwrap()
    }

    #[test]
    fn it_builds_a_password_grant_form() {
        let grant = grant();
        let form = grant.form();
        assert_eq!(
            form,
            [
                ("grant_type", "password"),
                ("username", "testuserpleaseignore"),
                ("password", "hunter2"),
                ("redirect_url", "http://localhost:8080"),
            ]
        );
    }

    #[test]
    fn it_parses_an_access_token() {
        let token = parse_token(&load_data("access_token")).unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn it_fails_when_the_access_token_is_missing() {
        let err = parse_token(&load_data("access_token_invalid_grant")).unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[test]
    fn it_fails_when_the_access_token_is_empty() {
        let err = parse_token(r#"{"access_token": ""}"#).unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[test]
    fn it_fails_on_malformed_bodies() {
        let err = parse_token("not json").unwrap_err();
        assert!(matches!(err, AuthError::Service(HTTPError::Body(_))));
    }

    async fn token_server(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/access_token"))
            .and(basic_auth("value", "value"))
            .and(body_string_contains("grant_type=password"))
            .and(body_string_contains("username=testuserpleaseignore"))
            .and(body_string_contains("password=hunter2"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    fn grant_for(server: &MockServer) -> PasswordGrant {
        grant().with_token_url(format!("{}/api/v1/access_token", server.uri()))
    }

    #[tokio::test]
    async fn it_exchanges_credentials_for_a_token() {
        do_logging();
        let server = token_server(200, &load_data("access_token")).await;
        let token = grant_for(&server).bearer_token().await.unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[tokio::test]
    async fn it_fails_when_the_token_endpoint_rejects_the_request() {
        do_logging();
        let server = token_server(401, r#"{"message": "Unauthorized", "error": 401}"#).await;
        let err = grant_for(&server).bearer_token().await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Service(HTTPError::Http(status)) if status == StatusCode::UNAUTHORIZED
        ));
    }

    #[tokio::test]
    async fn it_fails_when_a_successful_response_has_no_token() {
        do_logging();
        let server = token_server(200, &load_data("access_token_invalid_grant")).await;
        let err = grant_for(&server).bearer_token().await.unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[test]
    fn it_does_not_leak_tokens_when_debugging() {
        let token = BearerToken::new("supersecret");
        assert!(!format!("{token:?}").contains("supersecret"));
    }
}
