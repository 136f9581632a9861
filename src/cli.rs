// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! Drives the command-line program.

use crate::conf::{self, ConfError, Credentials};
use crate::http::{HTTPClientFactory, HTTPError};
use crate::rate_limit::{FixedInterval, RateLimiter};
use crate::reddit::PageWalker;
use crate::reddit::auth::{AuthError, AuthProvider, PasswordGrant};
use crate::reddit::service::{RedditService, Service};
use crate::reddit::walker::Stop;
use crate::sink::{JsonFileSink, Sink, SinkError};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Downloads your complete Reddit comment history to a JSON file")]
#[command(long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    /// Write comments to this file
    #[arg(short, long, value_name = "PATH", default_value = JsonFileSink::DEFAULT_PATH)]
    output: PathBuf,

    /// Stop after sending this many page requests
    #[arg(long, value_name = "N")]
    max_requests: Option<u32>,

    /// Milliseconds to wait before each page request
    #[arg(long, value_name = "MS", default_value_t = 2400)]
    delay_ms: u64,
}

impl Config {
    /// How chatty the program should be.
    pub fn verbosity(&self) -> &Verbosity<InfoLevel> {
        &self.verbosity
    }

    /// Where comments will be written.
    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    /// Upper bound on page requests, if any.
    pub fn max_requests(&self) -> Option<u32> {
        self.max_requests
    }

    /// Delay applied before each page request.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct Report {
    requests: u32,
    saved: usize,
    stop: Stop,
}

impl Report {
    /// Number of page requests sent.
    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Number of comments written to the sink; zero if nothing was written.
    pub fn saved(&self) -> usize {
        self.saved
    }

    /// Why comment retrieval stopped.
    pub fn stop(&self) -> &Stop {
        &self.stop
    }
}

/// Runs the whole download: authenticate, walk the listing, save.
#[derive(Debug)]
pub struct Runner<A, S, L, K> {
    auth: A,
    walker: PageWalker<S, L>,
    sink: K,
    username: String,
}

impl Runner<PasswordGrant, RedditService, FixedInterval, JsonFileSink> {
    /// Creates a runner that talks to Reddit on behalf of `credentials`.
    pub fn from_config(config: &Config, credentials: Credentials) -> Result<Self, Error> {
        let factory = HTTPClientFactory::new(credentials.user_agent());
        let username = credentials.username().to_string();
        let service = RedditService::new(&factory)?;
        let auth = PasswordGrant::new(&factory, credentials)?;
        let walker = PageWalker::new(service, FixedInterval::new(config.delay()))
            .max_requests(config.max_requests());
        let sink = JsonFileSink::new(config.output());
        Ok(Self::new(auth, walker, sink, username))
    }
}

impl<A, S, L, K> Runner<A, S, L, K>
where
    A: AuthProvider,
    S: Service,
    L: RateLimiter,
    K: Sink,
{
    /// Creates a new runner from its parts.
    pub fn new(auth: A, walker: PageWalker<S, L>, sink: K, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            auth,
            walker,
            sink,
            username,
        }
    }

    /// Downloads and saves the comment history.
    ///
    /// Fails if a token cannot be obtained or the comments cannot be
    /// saved. A failed page request does not fail the run: whatever was
    /// retrieved before it is saved.
    pub async fn run(&self) -> Result<Report, Error> {
        let token = self.auth.bearer_token().await?;

        let walk = self.walker.walk(&token, &self.username).await;
        let requests = walk.requests();
        let (comments, stop) = walk.into_parts();
        if let Stop::Failed(err) = &stop {
            warn!("Comment history is incomplete: {err}");
        }

        let saved = if comments.is_empty() {
            info!("No comments to save");
            0
        } else {
            self.sink.write(&comments).await?;
            comments.len()
        };

        Ok(Report {
            requests,
            saved,
            stop,
        })
    }
}

/// Loads configuration from the environment and runs the program.
pub async fn run(config: Config) -> Result<Report, Error> {
    conf::load_dotenv();
    let credentials = Credentials::from_env().inspect_err(|err| error!("{err}"))?;
    let runner = Runner::from_config(&config, credentials)?;
    let report = runner.run().await?;
    info!("Script completed");
    Ok(report)
}

/// A fatal error that stops the program.
#[derive(Debug, Error)]
pub enum Error {
    /// The program is missing configuration.
    #[error("{0}")]
    Conf(#[from] ConfError),

    /// An HTTP client could not be created.
    #[error("{0}")]
    Client(#[from] HTTPError),

    /// A bearer token could not be obtained.
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Comments could not be saved.
    #[error("{0}")]
    Sink(#[from] SinkError),
}
