use crate::http::{HTTPError, HTTPResult};
use crate::rate_limit::RateLimiter;
use crate::reddit::auth::{AuthError, AuthProvider, AuthResult, BearerToken};
use crate::reddit::service::Service;
use reqwest::StatusCode;
use serde_json::json;
use std::collections::VecDeque;
use std::fs;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Builds a listing body holding `count` comments with IDs `c{start}`,
/// `c{start + 1}`, and so on.
pub fn page_json(start: usize, count: usize, after: Option<&str>) -> String {
    let children: Vec<_> = (start..start + count)
        .map(|i| {
            json!({
                "kind": "t1",
                "data": {
                    "id": format!("c{i}"),
                    "subreddit_id": "t5_2qh1i",
                    "subreddit": "AskReddit",
                    "link_title": format!("Post {i}"),
                    "link_permalink": format!("https://www.reddit.com/r/AskReddit/comments/p{i}/post_{i}/"),
                    "author": "testuserpleaseignore",
                    "score": i,
                    "created_utc": 1748736000.0 - i as f64,
                    "body": format!("Comment number {i}"),
                }
            })
        })
        .collect();
    json!({
        "kind": "Listing",
        "data": {
            "after": after,
            "children": children,
            "before": null,
        }
    })
    .to_string()
}

#[derive(Debug)]
struct Request {
    token: String,
    after: String,
    limit: usize,
}

/// Replays canned responses, one per request, and records each request.
#[derive(Debug)]
pub struct TestService {
    responses: Mutex<VecDeque<HTTPResult<String>>>,
    requests: Mutex<Vec<Request>>,
}

impl TestService {
    pub fn new(responses: Vec<HTTPResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Cursors sent with each request, in order.
    pub fn cursors(&self) -> Vec<String> {
        self.requests().iter().map(|r| r.after.clone()).collect()
    }

    /// Page sizes requested, in order.
    pub fn limits(&self) -> Vec<usize> {
        self.requests().iter().map(|r| r.limit).collect()
    }

    /// Bearer tokens sent with each request, in order.
    pub fn tokens(&self) -> Vec<String> {
        self.requests().iter().map(|r| r.token.clone()).collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    fn requests(&self) -> std::sync::MutexGuard<'_, Vec<Request>> {
        self.requests.lock().expect("request log poisoned")
    }
}

impl Service for TestService {
    async fn get_comments(
        &self,
        token: &BearerToken,
        _username: &str,
        after: &str,
        limit: usize,
    ) -> HTTPResult<String> {
        self.requests().push(Request {
            token: token.as_str().to_string(),
            after: after.to_string(),
            limit,
        });
        self.responses
            .lock()
            .expect("responses poisoned")
            .pop_front()
            .expect("unexpected request: no responses left")
    }
}

/// Hands out a fixed token, or fails with the given status.
#[derive(Debug)]
pub enum StaticAuth {
    Token(&'static str),
    Rejected(StatusCode),
}

impl AuthProvider for StaticAuth {
    async fn bearer_token(&self) -> AuthResult<BearerToken> {
        match self {
            StaticAuth::Token(token) => Ok(BearerToken::new(*token)),
            StaticAuth::Rejected(status) => Err(AuthError::Service(HTTPError::Http(*status))),
        }
    }
}

/// Never waits, but counts how many times it was asked to.
#[derive(Debug, Default)]
pub struct CountingLimiter {
    waits: AtomicU32,
}

impl CountingLimiter {
    pub fn count(&self) -> u32 {
        self.waits.load(Ordering::SeqCst)
    }
}

impl RateLimiter for CountingLimiter {
    async fn wait(&self) {
        self.waits.fetch_add(1, Ordering::SeqCst);
    }
}
