// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! reddit-history downloads a Redditor's complete comment history and
//! saves it as a single JSON file. It logs in to the Reddit API as the
//! account owner, walks the account's comment listing page by page until
//! it runs out, and writes every comment it finds, newest first.
//!
//! # Setup
//!
//! Reddit only hands out API tokens to registered applications, so you
//! must first create a "script" app at <https://www.reddit.com/prefs/apps>.
//! Then set the following environment variables, either in your shell or
//! in a `.env` file in the directory you run the program from:
//!
//! | Variable          | Value                                         |
//! |-------------------|-----------------------------------------------|
//! | `CLIENT_ID`       | The app's client ID                           |
//! | `CLIENT_SECRET`   | The app's client secret                       |
//! | `REDIRECT_URL`    | The redirect URL registered for the app       |
//! | `REDDIT_USERNAME` | Your Reddit username                          |
//! | `REDDIT_PASSWORD` | Your Reddit password                          |
//! | `USER_AGENT`      | A descriptive user agent for your requests    |
//!
//! # Examples
//!
//! Save your comments to `./output/my-comments.json`:
//!
//! ```bash
//! reddit-history
//! ```
//!
//! Save them somewhere else, fetching at most three pages:
//!
//! ```bash
//! reddit-history --output ~/comments.json --max-requests 3
//! ```
//!
//! # Output
//!
//! The output file holds a JSON array of objects with the fields
//! `commentId`, `subredditId`, `subredditName`, `postTitle`, `postUrl`,
//! `author`, `score`, `commentDate`, and `body`, copied from the Reddit
//! API. Nothing is written if no comments were retrieved.
//!
//! # Rate limiting
//!
//! Requests are spaced 2.4 seconds apart by default. Reddit only serves
//! about 1,000 items from a listing, so even long histories take well
//! under a minute.
//!
//! # License
//!
//! reddit-history is licensed under the terms of the [Apache License 2.0].
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod conf;
pub mod http;
pub mod rate_limit;
pub mod reddit;
pub mod sink;

#[cfg(test)]
mod test_utils;
