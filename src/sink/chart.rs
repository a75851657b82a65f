//! Bar-chart report
//!
//! Renders the ranked words as a vertical bar chart and writes it as a PNG.
//! Rendering is file-only; nothing is displayed on screen.

use std::path::Path;

use plotters::prelude::*;

use crate::error::WordCountError;
use crate::types::RankedWord;

/// Bar fill color (sky blue).
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Chart size in pixels.
const CHART_SIZE: (u32, u32) = (1000, 600);

/// Render `top` as a bar chart saved to `path`, overwriting the file.
///
/// Words run along the x-axis in ranked order with counts on the y-axis;
/// the caption names the requested `top_n`. An empty list draws nothing and
/// leaves no file behind.
pub fn write_chart(top: &[RankedWord], top_n: usize, path: &Path) -> Result<(), WordCountError> {
    if top.is_empty() {
        log::warn!("no ranked words; skipping chart {}", path.display());
        return Ok(());
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    // Leave some headroom above the tallest bar.
    let tallest = top.iter().map(|entry| entry.count).max().unwrap_or(1);
    let y_max = tallest + (tallest / 10).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Top {top_n} Most Frequent Words"),
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..top.len() as u32).into_segmented(), 0..y_max)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(top.len() + 1)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => top
                .get(*index as usize)
                .map(|entry| entry.word.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_desc("Frequency")
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(8)
                .data(
                    top.iter()
                        .enumerate()
                        .map(|(index, entry)| (index as u32, entry.count)),
                ),
        )
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    log::info!("chart saved to {}", path.display());
    Ok(())
}

fn chart_error(err: impl std::fmt::Display) -> WordCountError {
    WordCountError::Chart(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_words.png");
        let top = vec![
            RankedWord::new("the", 3),
            RankedWord::new("cat", 2),
            RankedWord::new("mat", 1),
        ];

        write_chart(&top, 3, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_single_bar_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_words.png");

        write_chart(&[RankedWord::new("word", 1)], 10, &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_empty_list_skips_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top_words.png");

        write_chart(&[], 10, &path).unwrap();

        assert!(!path.exists());
    }
}
