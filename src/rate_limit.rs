// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! Gates that space out API requests.
//!
//! Reddit allows OAuth clients roughly 100 requests per minute. Rather
//! than reacting to `429 Too Many Requests`, callers [wait](RateLimiter::wait)
//! on a limiter before every request.

use log::trace;
use std::time::Duration;

/// Something that decides when the next request may be sent.
pub trait RateLimiter {
    /// Waits until another request is allowed.
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

impl<T: RateLimiter + Sync> RateLimiter for &T {
    fn wait(&self) -> impl Future<Output = ()> + Send {
        (**self).wait()
    }
}

/// Waits a fixed amount of time before every request, including the first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedInterval {
    delay: Duration,
}

impl FixedInterval {
    /// Default delay between requests: 2.4 seconds, or 25 requests a minute.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2400);

    /// Creates a limiter that waits `delay` before each request.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The delay applied before each request.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedInterval {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl RateLimiter for FixedInterval {
    async fn wait(&self) {
        trace!("Waiting {:?} before next request", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl RateLimiter for Unlimited {
    async fn wait(&self) {}
}
