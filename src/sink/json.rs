//! JSON report
//!
//! A single JSON object mapping word to count, keys in ranked order,
//! pretty-printed with four-space indentation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::WordCountError;
use crate::types::RankedWord;

/// Write `top` as a pretty-printed JSON object to `path`, overwriting the
/// file. Key order follows the ranked order.
pub fn write_json(top: &[RankedWord], path: &Path) -> Result<(), WordCountError> {
    let mut object = serde_json::Map::with_capacity(top.len());
    for entry in top {
        object.insert(entry.word.clone(), serde_json::Value::from(entry.count));
    }

    let file = File::create(path).map_err(|e| WordCountError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    object.serialize(&mut serializer)?;
    writer.flush().map_err(|e| WordCountError::io(path, e))?;
    log::info!("JSON report saved to {}", path.display());
    Ok(())
}
