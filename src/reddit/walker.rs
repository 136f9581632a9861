// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! Walks a Redditor's comment listing from newest to oldest.
//!
//! The listing endpoint is cursor-paginated: every response carries an
//! `after` token identifying where the next page starts. It never says
//! outright that there are no more pages, so a page shorter than the
//! requested [`PAGE_SIZE`] is taken to be the last one.

use crate::http::{HTTPError, HTTPResult};
use crate::rate_limit::RateLimiter;
use crate::reddit::auth::BearerToken;
use crate::reddit::service::Service;
use crate::reddit::thing::{Comment, Page};
use log::{debug, info, warn};

/// Number of comments requested per page.
pub const PAGE_SIZE: usize = 90;

/// Why a walk stopped.
#[derive(Debug)]
pub enum Stop {
    /// A page came back with fewer than [`PAGE_SIZE`] comments.
    ShortPage,

    /// The configured request ceiling was reached.
    RequestCeiling,

    /// A page could not be fetched or parsed. Comments gathered before
    /// the failure are still returned.
    Failed(HTTPError),
}

/// The outcome of walking a comment listing.
#[derive(Debug)]
pub struct Walk {
    comments: Vec<Comment>,
    requests: u32,
    stop: Stop,
}

impl Walk {
    /// Every comment retrieved, in listing order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of page requests that were sent.
    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Why the walk stopped.
    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    /// True if the walk ended because of a failed request.
    pub fn is_partial(&self) -> bool {
        matches!(self.stop, Stop::Failed(_))
    }

    /// Splits the walk into its comments and the reason it stopped.
    pub fn into_parts(self) -> (Vec<Comment>, Stop) {
        (self.comments, self.stop)
    }
}

/// Requests pages of comments until the listing is exhausted.
#[derive(Debug)]
pub struct PageWalker<S, L> {
    service: S,
    limiter: L,
    max_requests: Option<u32>,
}

impl<S: Service, L: RateLimiter> PageWalker<S, L> {
    /// Creates a walker that fetches pages from `service`, waiting on
    /// `limiter` before every request.
    pub fn new(service: S, limiter: L) -> Self {
        Self {
            service,
            limiter,
            max_requests: None,
        }
    }

    /// Caps the number of requests a walk may send, regardless of
    /// whether more pages exist. `None` (the default) walks until the
    /// listing is exhausted.
    pub fn max_requests(self, max_requests: Option<u32>) -> Self {
        Self {
            max_requests,
            ..self
        }
    }

    /// The underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Retrieves every comment `username` has made, newest first.
    ///
    /// Never fails outright: if a request fails, the comments gathered so
    /// far are returned and the error is recorded in the [`Walk`].
    pub async fn walk(&self, token: &BearerToken, username: &str) -> Walk {
        info!("Getting comments for {username}");

        let mut after = String::new();
        let mut comments = Vec::new();
        let mut requests = 0;

        let stop = loop {
            if self.max_requests.is_some_and(|max| requests >= max) {
                info!("Reached request limit of {requests}");
                break Stop::RequestCeiling;
            }

            debug!("Getting page number: {requests}");
            self.limiter.wait().await;
            requests += 1;

            let page = match self.fetch_page(token, username, &after).await {
                Ok(page) => page,
                Err(err) => {
                    warn!("Failed to get page {}: {err}", requests - 1);
                    break Stop::Failed(err);
                }
            };

            let full = page.len() == PAGE_SIZE;
            let (next, mut items) = page.into_parts();
            if full && next.is_empty() {
                // Preserved as-is: the next request restarts the listing.
                warn!("Full page returned without a cursor; restarting from the first page");
            }
            after = next;
            comments.append(&mut items);

            if !full {
                break Stop::ShortPage;
            }
        };

        info!(
            "Got comment history. Retrieved {} total comments",
            comments.len()
        );

        Walk {
            comments,
            requests,
            stop,
        }
    }

    async fn fetch_page(
        &self,
        token: &BearerToken,
        username: &str,
        after: &str,
    ) -> HTTPResult<Page> {
        let body = self
            .service
            .get_comments(token, username, after, PAGE_SIZE)
            .await?;
        Ok(Page::parse(&body)?)
    }
}
