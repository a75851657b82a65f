//! Pipeline runner — orchestrates stage execution and result flow.
//!
//! [`Pipeline`] wires the stages together: fetch, partition, map, reduce,
//! rank, sink. [`Pipeline::analyze`] covers the pure middle of that chain
//! (no network, no filesystem) and is what most tests drive;
//! [`Pipeline::run`] adds the download in front and the report writers
//! behind. An optional [`PipelineObserver`] is notified at each stage
//! boundary.

use crate::config::PipelineConfig;
use crate::error::WordCountError;
use crate::fetch;
use crate::mapreduce::{aggregate, counter::WordCounter, executor, partition};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_FETCH, STAGE_MAP,
    STAGE_PARTITION, STAGE_RANK, STAGE_REDUCE, STAGE_SINK,
};
use crate::rank;
use crate::sink;
use crate::types::TopWords;

// ============================================================================
// Run outcomes
// ============================================================================

/// Why a run produced no ranked words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    /// The corpus was empty; nothing was partitioned.
    EmptyCorpus,
    /// The corpus contained no word tokens (delimiters only).
    NoTokens,
}

/// Result of a run that did not fail.
///
/// A corpus without words is not an error: the pipeline short-circuits and
/// reports [`RunOutcome::NoData`] instead. The writing entry points leave no
/// output files behind in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Ranked words were produced.
    Completed(RunReport),
    /// The pipeline stopped before producing any ranked words.
    NoData(NoDataReason),
}

/// Facts about a completed analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The ranked words, highest count first.
    pub top_words: TopWords,
    /// Number of chunks the corpus was split into.
    pub chunk_count: usize,
    /// Number of distinct words across the whole corpus.
    pub distinct_words: usize,
    /// Total number of word tokens across the whole corpus.
    pub total_tokens: u64,
}

// ============================================================================
// Pipeline — configured stage container
// ============================================================================

/// The word-frequency pipeline, configured once and reusable across runs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    counter: WordCounter,
}

impl Pipeline {
    /// Validate `config` and build a pipeline around it.
    pub fn new(config: PipelineConfig) -> Result<Self, WordCountError> {
        config.validate()?;
        Ok(Self {
            config,
            counter: WordCounter::new(),
        })
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Download the corpus, analyze it, and write the three reports.
    ///
    /// Returns [`RunOutcome::NoData`] without writing any files when the
    /// corpus yields no words.
    pub fn run(&self) -> Result<RunOutcome, WordCountError> {
        self.run_with_observer(&mut NoopObserver)
    }

    /// [`Pipeline::run`], notifying `observer` at each stage boundary.
    pub fn run_with_observer(
        &self,
        observer: &mut impl PipelineObserver,
    ) -> Result<RunOutcome, WordCountError> {
        // Stage 0: Fetch
        observer.on_stage_start(STAGE_FETCH);
        let clock = StageClock::start();
        let text = fetch::fetch_text(&self.config.source_url)?;
        let report = StageReport::new(clock.elapsed()).with_items(text.len());
        observer.on_stage_end(STAGE_FETCH, &report);

        let outcome = self.analyze_with_observer(&text, observer);

        // Stage 5: Sink
        if let RunOutcome::Completed(run_report) = &outcome {
            observer.on_stage_start(STAGE_SINK);
            let clock = StageClock::start();
            self.write_outputs(run_report)?;
            let report = StageReport::new(clock.elapsed()).with_items(3);
            observer.on_stage_end(STAGE_SINK, &report);
        }
        Ok(outcome)
    }

    /// Partition, count, merge, and rank `text` without touching the
    /// network or the filesystem.
    pub fn analyze(&self, text: &str) -> RunOutcome {
        self.analyze_with_observer(text, &mut NoopObserver)
    }

    /// [`Pipeline::analyze`], notifying `observer` at each stage boundary.
    pub fn analyze_with_observer(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> RunOutcome {
        if text.is_empty() {
            log::info!("empty corpus; nothing to partition");
            return RunOutcome::NoData(NoDataReason::EmptyCorpus);
        }

        // Stage 1: Partition
        observer.on_stage_start(STAGE_PARTITION);
        let clock = StageClock::start();
        let ranges = partition::chunk_ranges(text, self.config.worker_count);
        let chunks: Vec<&str> = ranges.iter().map(|range| &text[range.clone()]).collect();
        let report = StageReport::new(clock.elapsed()).with_items(chunks.len());
        observer.on_stage_end(STAGE_PARTITION, &report);
        log::debug!("partitioned {} bytes into {} chunks", text.len(), chunks.len());

        // Stage 2: Map (one worker thread per chunk)
        observer.on_stage_start(STAGE_MAP);
        let clock = StageClock::start();
        let parts = executor::run_workers(&chunks, |chunk| self.counter.count(chunk));
        let report = StageReport::new(clock.elapsed()).with_items(parts.len());
        observer.on_stage_end(STAGE_MAP, &report);

        // Stage 3: Reduce (shuffle and sum)
        observer.on_stage_start(STAGE_REDUCE);
        let clock = StageClock::start();
        let totals = aggregate::merge_counts(parts);
        let report = StageReport::new(clock.elapsed()).with_items(totals.len());
        observer.on_stage_end(STAGE_REDUCE, &report);
        observer.on_counts(&totals);

        if totals.is_empty() {
            log::info!("corpus contains no word tokens; nothing to rank");
            return RunOutcome::NoData(NoDataReason::NoTokens);
        }

        let distinct_words = totals.len();
        let total_tokens: u64 = totals.values().sum();

        // Stage 4: Rank
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let top_words = rank::top_n(&totals, self.config.top_n);
        let report = StageReport::new(clock.elapsed()).with_items(top_words.len());
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_top_words(&top_words);
        log::debug!(
            "ranked top {} of {distinct_words} distinct words ({total_tokens} tokens)",
            top_words.len()
        );

        RunOutcome::Completed(RunReport {
            top_words,
            chunk_count: chunks.len(),
            distinct_words,
            total_tokens,
        })
    }

    /// Write the chart, text, and JSON reports for a completed analysis.
    pub fn write_outputs(&self, report: &RunReport) -> Result<(), WordCountError> {
        sink::write_outputs(&report.top_words, &self.config)
    }
}

// ============================================================================
// Tests
// ============================================================================
