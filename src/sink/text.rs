//! Line-oriented text report
//!
//! One `word: count` line per ranked entry, best first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::WordCountError;
use crate::types::RankedWord;

/// Write one `word: count` line per entry to `path`, overwriting the file.
pub fn write_text(top: &[RankedWord], path: &Path) -> Result<(), WordCountError> {
    let file = File::create(path).map_err(|e| WordCountError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for entry in top {
        writeln!(writer, "{entry}").map_err(|e| WordCountError::io(path, e))?;
    }
    writer.flush().map_err(|e| WordCountError::io(path, e))?;
    log::info!("text report saved to {}", path.display());
    Ok(())
}
