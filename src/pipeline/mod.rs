//! Pipeline orchestration
//!
//! The runner executes the stages in order; observers hook stage boundaries
//! for timing, logging, and artifact capture.

pub mod observer;
pub mod runner;
