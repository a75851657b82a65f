//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting log lines per stage.

use std::time::{Duration, Instant};

use crate::types::{TopWords, WordCounts};

/// Stage names, in execution order.
pub const STAGE_FETCH: &str = "fetch";
pub const STAGE_PARTITION: &str = "partition";
pub const STAGE_MAP: &str = "map";
pub const STAGE_REDUCE: &str = "reduce";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SINK: &str = "sink";

/// Timing and size facts about one completed stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    /// Report with timing only.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the number of items the stage produced.
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    /// Wall-clock time the stage took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of items the stage produced, for stages with a natural item
    /// count (bytes fetched, chunks, distinct words, ranked words, files).
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Measures elapsed wall-clock time for one stage.
#[derive(Debug)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    /// Start the clock.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Receives callbacks at pipeline stage boundaries.
///
/// All methods have empty defaults, so an observer only implements the
/// hooks it cares about.
pub trait PipelineObserver {
    /// Called immediately before a stage runs.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// Called after a stage completes.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called with the merged global counts after the reduce stage.
    fn on_counts(&mut self, _counts: &WordCounts) {}

    /// Called with the ranked words after the rank stage.
    fn on_top_words(&mut self, _top: &TopWords) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects a `(stage, report)` pair for every completed stage.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed stages in execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

/// Emits a `log::debug!` line for every completed stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        match report.items() {
            Some(items) => {
                log::debug!("stage {stage}: {items} items in {:?}", report.elapsed())
            }
            None => log::debug!("stage {stage}: done in {:?}", report.elapsed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_report_carries_items() {
        let report = StageReport::new(Duration::from_millis(5)).with_items(42);
        assert_eq!(report.elapsed(), Duration::from_millis(5));
        assert_eq!(report.items(), Some(42));
    }

    #[test]
    fn test_stage_report_without_items() {
        let report = StageReport::new(Duration::ZERO);
        assert_eq!(report.items(), None);
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_end(STAGE_MAP, &StageReport::new(Duration::ZERO).with_items(4));
        observer.on_stage_end(STAGE_REDUCE, &StageReport::new(Duration::ZERO));

        let stages: Vec<&str> = observer.reports().iter().map(|(stage, _)| *stage).collect();
        assert_eq!(stages, vec![STAGE_MAP, STAGE_REDUCE]);
        assert_eq!(observer.reports()[0].1.items(), Some(4));
    }
}
