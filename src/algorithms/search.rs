//! Searching algorithms.

use crate::counter::OpCounter;

/// Linear search: O(n).
///
/// Counts one comparison per element visited, including the matching one.
pub fn linear_search(data: &[i32], key: i32, counter: &mut OpCounter) -> Option<usize> {
    for (i, &value) in data.iter().enumerate() {
        counter.comparison();
        if value == key {
            return Some(i);
        }
    }
    None
}

/// Binary search: O(log n). Requires sorted input; on unsorted data the
/// result is unspecified.
///
/// Each probe counts one comparison for the equality check and a second for
/// the less-than branch when not equal, so a matching probe costs one
/// comparison and a non-matching probe costs two.
pub fn binary_search(data: &[i32], key: i32, counter: &mut OpCounter) -> Option<usize> {
    let mut low: isize = 0;
    let mut high: isize = data.len() as isize - 1;
    while low <= high {
        let mid = (low + (high - low) / 2) as usize;
        counter.comparison();
        if data[mid] == key {
            return Some(mid);
        }
        counter.comparison();
        if data[mid] < key {
            low = mid as isize + 1;
        } else {
            high = mid as isize - 1;
        }
    }
    None
}
