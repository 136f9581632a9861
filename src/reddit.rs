//! Reddit API clients and services for communicating with Reddit over HTTP.

pub mod auth;
pub mod service;
pub mod thing;
pub mod walker;

pub use walker::PageWalker;
