// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! Environment and configuration utilities.

use log::{info, warn};
use std::env;
use thiserror::Error;

/// Credentials and identity needed to talk to the Reddit API.
///
/// Reddit "script" applications authenticate with the password grant, so
/// both the application's client credentials and the account's username
/// and password are required. All values are read once, up front, and
/// never change for the life of a run.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    redirect_url: String,
    username: String,
    password: String,
    user_agent: String,
}

impl Credentials {
    /// Environment variable holding the application's client secret.
    pub const CLIENT_SECRET: &'static str = "CLIENT_SECRET";
    /// Environment variable holding the application's client ID.
    pub const CLIENT_ID: &'static str = "CLIENT_ID";
    /// Environment variable holding the application's redirect URL.
    pub const REDIRECT_URL: &'static str = "REDIRECT_URL";
    /// Environment variable holding the Reddit account's username.
    pub const REDDIT_USERNAME: &'static str = "REDDIT_USERNAME";
    /// Environment variable holding the Reddit account's password.
    pub const REDDIT_PASSWORD: &'static str = "REDDIT_PASSWORD";
    /// Environment variable holding the user agent sent with every request.
    pub const USER_AGENT: &'static str = "USER_AGENT";

    /// Reads credentials from the process environment.
    ///
    /// Every variable must be set to a non-empty value. Each missing
    /// variable is logged, and the returned error names all of them so
    /// the user can fix everything at once.
    pub fn from_env() -> ConfResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads credentials using `lookup` to resolve variable names to values.
    pub fn from_lookup<F>(lookup: F) -> ConfResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Validating env data");

        let mut missing = Vec::new();
        let mut fetch = |name: &'static str| match lookup(name).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => {
                warn!("{name} is invalid");
                missing.push(name);
                String::new()
            }
        };

        let credentials = Self {
            client_secret: fetch(Self::CLIENT_SECRET),
            client_id: fetch(Self::CLIENT_ID),
            redirect_url: fetch(Self::REDIRECT_URL),
            username: fetch(Self::REDDIT_USERNAME),
            password: fetch(Self::REDDIT_PASSWORD),
            user_agent: fetch(Self::USER_AGENT),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(ConfError::Missing(missing))
        }
    }

    /// The application's client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The application's client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// The redirect URL registered for the application.
    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    /// The Reddit account's username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The Reddit account's password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The user agent to send with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Loads variables from a `.env` file in the working directory, if present.
///
/// Variables already set in the environment take precedence. A missing
/// file is not an error.
pub fn load_dotenv() {
    info!("Getting env data");
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => warn!("Could not load .env file: {err}"),
    }
}

/// Standard result type for configuration loading.
pub type ConfResult<T> = Result<T, ConfError>;

/// Indicates that the program is not configured correctly.
#[derive(Debug, Error)]
pub enum ConfError {
    /// One or more required environment variables are unset or empty.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}
