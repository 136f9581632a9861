// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 reddit-history contributors

//! Destinations for a retrieved comment history.

use crate::reddit::thing::Comment;
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Somewhere a comment history can be saved.
pub trait Sink {
    /// Persists `comments`, replacing anything previously saved.
    fn write(&self, comments: &[Comment]) -> impl Future<Output = SinkResult<()>> + Send;
}

/// Writes comments to a file as a single JSON array.
#[derive(Clone, Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Default location of the output file, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "./output/my-comments.json";

    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self { path }
    }

    /// The file comments are written to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl Sink for JsonFileSink {
    async fn write(&self, comments: &[Comment]) -> SinkResult<()> {
        info!("Writing comments to {}", self.path.display());

        let data = serde_json::to_vec(comments)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, data).await?;

        info!("Wrote {} comments", comments.len());
        Ok(())
    }
}

/// Standard result type for saving comments.
pub type SinkResult<T> = Result<T, SinkError>;

/// Indicates that comments could not be saved.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Comments could not be serialized.
    #[error("Could not serialize comments: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("Could not write output file: {0}")]
    Io(#[from] io::Error),
}
