//! # rapid-wordcount
//!
//! Parallel map/reduce word-frequency analysis: download a text corpus,
//! split it into one chunk per worker thread, count words per chunk
//! concurrently, merge the partial counts, rank the top N, and write three
//! reports (a bar-chart PNG, a `word: count` text file, and a JSON object).
//!
//! The pipeline is deliberately simple: a fixed fan-out of independent
//! workers joined before reduction, no shared mutable state, no retries.
//!
//! # Quick start
//!
//! ```
//! use rapid_wordcount::{Pipeline, PipelineConfig, RunOutcome};
//!
//! let config = PipelineConfig::default().with_worker_count(2).with_top_n(3);
//! let pipeline = Pipeline::new(config).unwrap();
//!
//! match pipeline.analyze("the cat sat on the mat") {
//!     RunOutcome::Completed(report) => {
//!         assert_eq!(report.top_words[0].word, "the");
//!         assert_eq!(report.top_words[0].count, 2);
//!     }
//!     RunOutcome::NoData(_) => unreachable!(),
//! }
//! ```
//!
//! [`Pipeline::run`] adds the download in front and the report writers
//! behind; [`PipelineConfig`] is the whole configuration surface.

pub mod config;
pub mod error;
pub mod fetch;
pub mod mapreduce;
pub mod nlp;
pub mod pipeline;
pub mod rank;
pub mod sink;
pub mod types;

pub use config::PipelineConfig;
pub use error::{ConfigError, WordCountError};
pub use pipeline::runner::{NoDataReason, Pipeline, RunOutcome, RunReport};
pub use types::{RankedWord, TopWords, WordCounts};
