//! Binary entry point: run the word-frequency pipeline with the default
//! configuration and report progress on stdout.

use std::process;

use rapid_wordcount::pipeline::observer::LogObserver;
use rapid_wordcount::{Pipeline, PipelineConfig, RunOutcome, WordCountError};

fn main() {
    env_logger::init();

    process::exit(match run(PipelineConfig::default()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    });
}

fn run(config: PipelineConfig) -> Result<(), WordCountError> {
    let pipeline = Pipeline::new(config)?;

    println!("Downloading text...");
    let text = rapid_wordcount::fetch::fetch_text(&pipeline.config().source_url)?;

    println!("Processing with MapReduce...");
    let mut observer = LogObserver;
    let report = match pipeline.analyze_with_observer(&text, &mut observer) {
        RunOutcome::Completed(report) => report,
        RunOutcome::NoData(_) => {
            println!("No data to visualize.");
            return Ok(());
        }
    };

    println!("Visualizing and saving results...");
    pipeline.write_outputs(&report)?;

    let config = pipeline.config();
    println!("Plot saved to '{}'", config.plot_path.display());
    println!("Top words saved to '{}'", config.text_path.display());
    println!("Top words saved to '{}'", config.json_path.display());
    Ok(())
}
