//! Measurement runner: wraps algorithm invocations with a monotonic clock
//! and a fresh counter, and packages the result as an immutable record.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::algorithms::{SearchAlgorithm, SortAlgorithm};
use crate::counter::OpCounter;
use crate::error::{BenchError, Result};

/// Immutable result of one measurement.
///
/// `swaps` is `None` for pure searches, which never mutate the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct StatsRecord {
    /// Stable algorithm identifier (e.g. `quick_sort`).
    pub algorithm: &'static str,
    /// Dataset length at measurement time.
    pub size: usize,
    /// Wall-clock duration in milliseconds.
    pub elapsed_ms: f64,
    /// Comparisons recorded by the algorithm body.
    pub comparisons: u64,
    /// Mutating operations recorded by the algorithm body, if any.
    pub swaps: Option<u64>,
}

/// Times a single invocation with a monotonic clock.
///
/// Returns the elapsed wall-clock milliseconds together with the closure's
/// output. Execution is synchronous and single-threaded; there is no
/// cancellation and no partial result.
pub fn measure<T>(f: impl FnOnce() -> T) -> (f64, T) {
    let start = Instant::now();
    let output = f();
    (start.elapsed().as_secs_f64() * 1_000.0, output)
}

/// Measures one sort over a private copy of `dataset`.
///
/// The clone keeps the caller's reference dataset unmutated, so subsequent
/// algorithms can be measured against the same unsorted baseline. Empty
/// datasets are legal and produce a zero-count record.
pub fn measure_sort(dataset: &[i32], algorithm: SortAlgorithm) -> StatsRecord {
    let mut working = dataset.to_vec();
    let mut counter = OpCounter::new();
    let (elapsed_ms, ()) = measure(|| algorithm.run(&mut working, &mut counter));
    let record = StatsRecord {
        algorithm: algorithm.label(),
        size: dataset.len(),
        elapsed_ms,
        comparisons: counter.comparisons(),
        swaps: Some(counter.swaps()),
    };
    debug!(
        algorithm = record.algorithm,
        size = record.size,
        elapsed_ms = record.elapsed_ms,
        comparisons = record.comparisons,
        swaps = counter.swaps(),
        "runner.sort.completed"
    );
    record
}

/// Measures one search over `dataset` for `key`. No clone is taken since
/// searches do not mutate.
///
/// For [`SearchAlgorithm::Binary`] the dataset must already be sorted; the
/// precondition belongs to the caller and is not checked here.
pub fn measure_search(dataset: &[i32], key: i32, algorithm: SearchAlgorithm) -> Result<StatsRecord> {
    if dataset.is_empty() {
        return Err(BenchError::InvalidArgument(
            "search requires a non-empty dataset",
        ));
    }
    let mut counter = OpCounter::new();
    let (elapsed_ms, found) = measure(|| algorithm.run(dataset, key, &mut counter));
    let record = StatsRecord {
        algorithm: algorithm.label(),
        size: dataset.len(),
        elapsed_ms,
        comparisons: counter.comparisons(),
        swaps: None,
    };
    debug!(
        algorithm = record.algorithm,
        size = record.size,
        elapsed_ms = record.elapsed_ms,
        comparisons = record.comparisons,
        found = found.map(|i| i as u64),
        "runner.search.completed"
    );
    Ok(record)
}
