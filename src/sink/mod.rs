//! Report sinks
//!
//! Three independent writers consume the ranked list without mutating it: a
//! bar-chart PNG, a `word: count` text file, and a pretty-printed JSON
//! object. All three preserve the ranked order, and each overwrites its
//! target file on every run.

pub mod chart;
pub mod json;
pub mod text;

use crate::config::PipelineConfig;
use crate::error::WordCountError;
use crate::types::RankedWord;

/// Write all three reports for `top` to the paths in `config`.
///
/// Stops at the first failing writer.
pub fn write_outputs(top: &[RankedWord], config: &PipelineConfig) -> Result<(), WordCountError> {
    chart::write_chart(top, config.top_n, &config.plot_path)?;
    text::write_text(top, &config.text_path)?;
    json::write_json(top, &config.json_path)?;
    Ok(())
}
