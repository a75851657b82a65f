//! Error types for the word-frequency pipeline
//!
//! [`WordCountError`] covers everything that can abort a run: a bad
//! configuration, a failed download, or a failed report write. Analysis
//! itself (partition, map, reduce, rank) is total and has no error cases.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("source_url must not be empty")]
    EmptySourceUrl,
    #[error("worker_count must be at least 1")]
    ZeroWorkerCount,
    #[error("top_n must be at least 1")]
    ZeroTopN,
    #[error("{0} must not be empty")]
    EmptyOutputPath(&'static str),
}

/// Any failure that aborts a pipeline run.
#[derive(Debug, Error)]
pub enum WordCountError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to download text: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to download text: HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render chart: {0}")]
    Chart(String),
}

impl WordCountError {
    /// Attach the offending path to an I/O error.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
