//! Sorting algorithms.
//!
//! All sorts are ascending and in place. Swap counts mean mutating
//! operations: plain exchanges for quick/heap/bubble/selection, element
//! shifts for insertion/shell, element write-backs for merge.

use crate::counter::OpCounter;

/// Quicksort: average O(n log n), worst O(n²).
///
/// Lomuto partition with the last element as pivot. Every element swap is
/// counted, including the final pivot swap and self-swaps.
pub fn quick_sort(data: &mut [i32], counter: &mut OpCounter) {
    if data.len() < 2 {
        return;
    }
    let high = data.len() - 1;
    quick_sort_range(data, 0, high, counter);
}

fn quick_sort_range(data: &mut [i32], low: usize, high: usize, counter: &mut OpCounter) {
    if low >= high {
        return;
    }
    let pivot = partition(data, low, high, counter);
    if pivot > low {
        quick_sort_range(data, low, pivot - 1, counter);
    }
    if pivot < high {
        quick_sort_range(data, pivot + 1, high, counter);
    }
}

fn partition(data: &mut [i32], low: usize, high: usize, counter: &mut OpCounter) -> usize {
    let pivot = data[high];
    let mut slot = low;
    for j in low..high {
        counter.comparison();
        if data[j] < pivot {
            data.swap(slot, j);
            counter.swap();
            slot += 1;
        }
    }
    data.swap(slot, high);
    counter.swap();
    slot
}

/// Merge sort: O(n log n).
///
/// Top-down, merging temporary copies of the two halves back into the
/// slice. Counts one comparison per element comparison and one swap per
/// element write-back, drain loops included.
pub fn merge_sort(data: &mut [i32], counter: &mut OpCounter) {
    if data.len() < 2 {
        return;
    }
    let mid = data.len() / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    merge_sort(&mut left, counter);
    merge_sort(&mut right, counter);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        counter.comparison();
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        counter.swap();
        k += 1;
    }
    while i < left.len() {
        data[k] = left[i];
        counter.swap();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        data[k] = right[j];
        counter.swap();
        j += 1;
        k += 1;
    }
}

/// Heap sort: O(n log n).
pub fn heap_sort(data: &mut [i32], counter: &mut OpCounter) {
    let n = data.len();
    for i in (0..n / 2).rev() {
        sift_down(data, n, i, counter);
    }
    for i in (1..n).rev() {
        data.swap(0, i);
        counter.swap();
        sift_down(data, i, 0, counter);
    }
}

fn sift_down(data: &mut [i32], heap_len: usize, root: usize, counter: &mut OpCounter) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    if left < heap_len {
        counter.comparison();
        if data[left] > data[largest] {
            largest = left;
        }
    }
    if right < heap_len {
        counter.comparison();
        if data[right] > data[largest] {
            largest = right;
        }
    }
    if largest != root {
        data.swap(root, largest);
        counter.swap();
        sift_down(data, heap_len, largest, counter);
    }
}

/// Bubble sort: O(n²).
pub fn bubble_sort(data: &mut [i32], counter: &mut OpCounter) {
    let n = data.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            counter.comparison();
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                counter.swap();
            }
        }
    }
}

/// Insertion sort: O(n²).
///
/// Counts one comparison per shift test, including the failing one that
/// stops the inner loop, and one swap per element shift.
pub fn insertion_sort(data: &mut [i32], counter: &mut OpCounter) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            counter.comparison();
            if data[j - 1] > key {
                data[j] = data[j - 1];
                counter.swap();
                j -= 1;
            } else {
                break;
            }
        }
        data[j] = key;
    }
}

/// Selection sort: O(n²).
///
/// The final swap of each pass is skipped (and uncounted) when the minimum
/// is already in place.
pub fn selection_sort(data: &mut [i32], counter: &mut OpCounter) {
    let n = data.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            counter.comparison();
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            data.swap(i, min_index);
            counter.swap();
        }
    }
}

/// Shell sort with halving gaps: between O(n log² n) and O(n^1.5).
///
/// Counts one comparison per gapped test, including the terminating one,
/// and one swap per gapped element shift.
pub fn shell_sort(data: &mut [i32], counter: &mut OpCounter) {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            while j >= gap {
                counter.comparison();
                if data[j - gap] > temp {
                    data[j] = data[j - gap];
                    counter.swap();
                    j -= gap;
                } else {
                    break;
                }
            }
            data[j] = temp;
        }
        gap /= 2;
    }
}
