//! Pipeline configuration
//!
//! [`PipelineConfig`] is the single configuration surface for a run: where
//! the corpus comes from, how wide the map fan-out is, how many words to
//! keep, and where the three reports land. The binary runs with
//! [`PipelineConfig::default`]; embedders can build one with the `with_*`
//! methods or deserialize one from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, WordCountError};

/// Default corpus: Pride and Prejudice from Project Gutenberg.
pub const DEFAULT_SOURCE_URL: &str = "https://www.gutenberg.org/files/1342/1342-0.txt";

/// Configuration for one pipeline run.
///
/// Every field has a default, so a JSON configuration only needs the fields
/// it wants to override. Unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// URL the corpus is downloaded from.
    pub source_url: String,
    /// Number of top-ranked words to keep and report.
    pub top_n: usize,
    /// Number of chunks for the map phase, one worker thread per chunk.
    pub worker_count: usize,
    /// Output path for the bar-chart image.
    pub plot_path: PathBuf,
    /// Output path for the line-oriented text report.
    pub text_path: PathBuf,
    /// Output path for the JSON report.
    pub json_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            top_n: 10,
            worker_count: 4,
            plot_path: PathBuf::from("top_words.png"),
            text_path: PathBuf::from("top_words.txt"),
            json_path: PathBuf::from("top_words.json"),
        }
    }
}

impl PipelineConfig {
    /// Set the corpus URL.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Set how many top-ranked words are kept.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the map-phase fan-out (one worker thread per chunk).
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Re-root all three output files under `dir`, keeping their file names.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.plot_path = rebase(dir, &self.plot_path);
        self.text_path = rebase(dir, &self.text_path);
        self.json_path = rebase(dir, &self.json_path);
        self
    }

    /// Check the configuration before any work happens.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_url.is_empty() {
            return Err(ConfigError::EmptySourceUrl);
        }
        if self.worker_count == 0 {
            return Err(ConfigError::ZeroWorkerCount);
        }
        if self.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        if self.plot_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath("plot_path"));
        }
        if self.text_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath("text_path"));
        }
        if self.json_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath("json_path"));
        }
        Ok(())
    }

    /// Deserialize and validate a configuration from a JSON string.
    ///
    /// Omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, WordCountError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WordCountError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| WordCountError::io(path, e))?;
        Self::from_json_str(&json)
    }
}

fn rebase(dir: &Path, path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}
