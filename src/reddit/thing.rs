// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. This
//! module parses the listings the API wraps things in and flattens
//! comments into the records that end up in the output file.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A Reddit comment, flattened to the fields worth archiving.
///
/// Field names and their order are exactly what is written to the
/// output file. Values are copied as the API sent them; a field the API
/// left out (or sent as `null`) is left out of the record, too.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subreddit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subreddit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment_date: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl Comment {
    /// The comment's ID, without the `t1_` kind prefix.
    pub fn id(&self) -> Option<&str> {
        self.comment_id.as_deref()
    }

    /// Fullname of the subreddit the comment was posted in (e.g., `t5_2qh1i`).
    pub fn subreddit_id(&self) -> Option<&str> {
        self.subreddit_id.as_deref()
    }

    /// Name of the subreddit the comment was posted in.
    pub fn subreddit(&self) -> Option<&str> {
        self.subreddit_name.as_deref()
    }

    /// Title of the post the comment replies to.
    pub fn post_title(&self) -> Option<&str> {
        self.post_title.as_deref()
    }

    /// Permalink to the post the comment replies to.
    pub fn post_url(&self) -> Option<&str> {
        self.post_url.as_deref()
    }

    /// The comment's author.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// The comment's score.
    pub fn score(&self) -> Option<&Number> {
        self.score.as_ref()
    }

    /// When the comment was created, in seconds since the Unix epoch, UTC.
    pub fn created_utc(&self) -> Option<&Number> {
        self.comment_date.as_ref()
    }

    /// The comment's raw Markdown body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn from_raw(raw: RawComment) -> Self {
        Self {
            comment_id: raw.id,
            subreddit_id: raw.subreddit_id,
            subreddit_name: raw.subreddit,
            post_title: raw.link_title,
            post_url: raw.link_permalink,
            author: raw.author,
            score: raw.score,
            comment_date: raw.created_utc,
            body: raw.body,
        }
    }
}

/// A page of comments as returned by `/user/<user>/comments`.
#[derive(Debug, PartialEq)]
pub struct Page {
    after: String,
    comments: Vec<Comment>,
}

impl Page {
    /// Creates a page from a cursor and its comments.
    pub fn new(after: impl Into<String>, comments: Vec<Comment>) -> Self {
        let after = after.into();
        Self { after, comments }
    }

    /// Parses a raw listing response into a page of comments.
    ///
    /// Fails if the body is not JSON or does not contain `data.children`.
    /// A missing or null `data.after` yields an empty cursor. Missing
    /// comment fields are tolerated.
    pub fn parse(data: &str) -> Result<Self, serde_json::Error> {
        let listing: Listing = serde_json::from_str(data)?;
        let after = listing.data.after.unwrap_or_default();
        let comments = listing
            .data
            .children
            .into_iter()
            .map(|child| Comment::from_raw(child.data))
            .collect();
        Ok(Self { after, comments })
    }

    /// The cursor marking where the next page begins, or an empty string
    /// if the response did not include one.
    pub fn after(&self) -> &str {
        &self.after
    }

    /// Comments on this page, in the order the API returned them.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments on this page.
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// True if the page contains no comments.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Splits the page into its cursor and comments.
    pub fn into_parts(self) -> (String, Vec<Comment>) {
        (self.after, self.comments)
    }
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    after: Option<String>,
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    #[serde(default)]
    data: RawComment,
}

/// Comment data as the Reddit API sends it.
#[derive(Debug, Default, Deserialize)]
struct RawComment {
    id: Option<String>,
    subreddit_id: Option<String>,
    subreddit: Option<String>,
    link_title: Option<String>,
    link_permalink: Option<String>,
    author: Option<String>,
    score: Option<Number>,
    created_utc: Option<Number>,
    body: Option<String>,
}
