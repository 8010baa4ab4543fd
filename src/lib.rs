//! Compás: an instrumented harness for classic in-memory sorting and
//! searching algorithms.
//!
//! The crate generates synthetic integer datasets, runs each algorithm with
//! an operation counter threaded through its body, and reports wall-clock
//! time plus comparison/swap tallies. It is a single-run demonstration tool
//! for asymptotic complexity, not a statistically rigorous benchmark (no
//! warm-up, no repeated trials, no outlier rejection).
//!
//! The measurement entry points are [`runner::measure_sort`] and
//! [`runner::measure_search`]; the thin `compare-bench` binary drives them
//! across a size list and formats the results.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algorithms;
pub mod counter;
pub mod dataset;
pub mod error;
pub mod report;
pub mod runner;

pub use algorithms::{SearchAlgorithm, SortAlgorithm};
pub use counter::OpCounter;
pub use dataset::DataGenerator;
pub use error::{BenchError, Result};
pub use report::ReportSet;
pub use runner::{measure, measure_search, measure_sort, StatsRecord};
