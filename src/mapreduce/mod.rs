//! Parallel map/reduce word counting
//!
//! The core of the crate: partition the corpus into one chunk per worker,
//! count words per chunk on independent threads, and merge the per-chunk
//! counts into a single global map.

pub mod aggregate;
pub mod counter;
pub mod executor;
pub mod partition;
