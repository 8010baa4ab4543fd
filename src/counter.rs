//! Operation tallies threaded through algorithm bodies.

/// Mutable tally of comparisons and swaps for one algorithm invocation.
///
/// Counters are incremented only by explicit call sites inside algorithm
/// bodies, never inferred. A fresh instance is created per measurement; an
/// instance must not be reused across two invocations being compared.
///
/// For sorts, `swaps` means mutating operations: merge sort counts element
/// write-backs, insertion and shell sort count element shifts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCounter {
    comparisons: u64,
    swaps: u64,
}

impl OpCounter {
    /// Creates a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one element comparison.
    #[inline]
    pub fn comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    /// Records one element swap, shift, or write-back.
    #[inline]
    pub fn swap(&mut self) {
        self.swaps = self.swaps.saturating_add(1);
    }

    /// Comparisons recorded so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Swaps recorded so far.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }
}
