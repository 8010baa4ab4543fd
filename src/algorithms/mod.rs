//! Counter-instrumented sorting and searching algorithms.
//!
//! Every routine takes an [`OpCounter`] by mutable reference and records
//! operations at fixed call sites; the counting points are part of the
//! public contract so counts stay comparable across runs.

use crate::counter::OpCounter;

pub mod search;
pub mod sort;

pub use search::{binary_search, linear_search};
pub use sort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort, shell_sort,
};

/// The seven in-place sorts. Disjoint from [`SearchAlgorithm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Average O(n log n), worst O(n²) on pivot-degenerate input.
    Quick,
    /// O(n log n); counts element write-backs as swaps.
    Merge,
    /// O(n log n).
    Heap,
    /// O(n²).
    Bubble,
    /// O(n²).
    Insertion,
    /// O(n²).
    Selection,
    /// Between O(n log² n) and O(n^1.5) with halving gaps.
    Shell,
}

impl SortAlgorithm {
    /// All sort variants, in menu order.
    pub fn all() -> [Self; 7] {
        [
            Self::Quick,
            Self::Merge,
            Self::Heap,
            Self::Bubble,
            Self::Insertion,
            Self::Selection,
            Self::Shell,
        ]
    }

    /// Stable identifier used in reports and log events.
    pub fn label(self) -> &'static str {
        match self {
            Self::Quick => "quick_sort",
            Self::Merge => "merge_sort",
            Self::Heap => "heap_sort",
            Self::Bubble => "bubble_sort",
            Self::Insertion => "insertion_sort",
            Self::Selection => "selection_sort",
            Self::Shell => "shell_sort",
        }
    }

    /// Sorts `data` ascending in place, recording operations in `counter`.
    pub fn run(self, data: &mut [i32], counter: &mut OpCounter) {
        match self {
            Self::Quick => quick_sort(data, counter),
            Self::Merge => merge_sort(data, counter),
            Self::Heap => heap_sort(data, counter),
            Self::Bubble => bubble_sort(data, counter),
            Self::Insertion => insertion_sort(data, counter),
            Self::Selection => selection_sort(data, counter),
            Self::Shell => shell_sort(data, counter),
        }
    }
}

/// The two read-only searches. Disjoint from [`SortAlgorithm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// O(n) scan.
    Linear,
    /// O(log n); requires the input pre-sorted (caller's responsibility).
    Binary,
}

impl SearchAlgorithm {
    /// Both search variants.
    pub fn all() -> [Self; 2] {
        [Self::Linear, Self::Binary]
    }

    /// Stable identifier used in reports and log events.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "linear_search",
            Self::Binary => "binary_search",
        }
    }

    /// Looks up `key` in `data`, recording comparisons in `counter`.
    ///
    /// Returns the index of a matching element, or `None` when absent. For
    /// [`SearchAlgorithm::Binary`] the caller must pass sorted data;
    /// unsorted input yields an unspecified result, not an error.
    pub fn run(self, data: &[i32], key: i32, counter: &mut OpCounter) -> Option<usize> {
        match self {
            Self::Linear => linear_search(data, key, counter),
            Self::Binary => binary_search(data, key, counter),
        }
    }
}
