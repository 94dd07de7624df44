// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Median selection by quickselect, and the sort built on the same partition.
//!
//! Everything here compares through a caller-supplied key function, never by
//! equality of the items themselves, so duplicates and custom orders work.
//! Keys only need [`PartialOrd`]; an incomparable key (NaN) is treated as "not
//! greater" than the pivot and lands on the low side.
//!
//! Positions passed to [`quickselect`] are 1-indexed: `n == 1` is the minimum.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// How a partition step picks its pivot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PivotRule {
    /// Always the last element of the range. Quadratic on sorted input.
    Last,
    /// Median of the first, middle, and last elements, moved to the end first.
    #[default]
    MedianOfThree,
}

/// Options for the bulk builders of [`PointIndex`](crate::PointIndex) and
/// [`BoundingBoxIndex`](crate::BoundingBoxIndex).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BuildOptions {
    /// Pivot rule used by the median selection during construction.
    pub pivot: PivotRule,
}

/// Selection routines parameterized by a [`PivotRule`].
///
/// The free functions in this module use `Selector::default()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Pivot rule for every partition step.
    pub pivot: PivotRule,
}

fn greater<K: PartialOrd>(a: &K, b: &K) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Greater))
}

fn less<K: PartialOrd>(a: &K, b: &K) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Less))
}

/// Lomuto partition of `seq[low..=high]` around its last element.
///
/// Afterwards every element left of the returned index has a key that is not
/// greater than the pivot's, and every element right of it has a greater key.
/// Returns the pivot's final index.
///
/// # Panics
///
/// Panics if `high` is out of bounds or `low > high`.
pub fn partition<T, K, F>(seq: &mut [T], low: usize, high: usize, key: &mut F) -> usize
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    assert!(low <= high, "partition range is inverted: {low} > {high}");
    let pivot = key(&seq[high]);
    let mut store = low;
    for j in low..high {
        if !greater(&key(&seq[j]), &pivot) {
            seq.swap(store, j);
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}

impl Selector {
    /// Create a selector with the given pivot rule.
    pub const fn new(pivot: PivotRule) -> Self {
        Self { pivot }
    }

    /// Move the chosen pivot of `seq[low..=high]` to `high`.
    fn place_pivot<T, K, F>(self, seq: &mut [T], low: usize, high: usize, key: &mut F)
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        if self.pivot == PivotRule::Last || high - low < 2 {
            return;
        }
        let mid = low + (high - low) / 2;
        let (a, b, c) = (key(&seq[low]), key(&seq[mid]), key(&seq[high]));
        let median = if less(&a, &b) {
            if less(&b, &c) {
                mid
            } else if less(&a, &c) {
                high
            } else {
                low
            }
        } else if less(&a, &c) {
            low
        } else if less(&b, &c) {
            high
        } else {
            mid
        };
        seq.swap(median, high);
    }

    /// The `n`-th smallest element of `seq` by `key` (1-indexed).
    ///
    /// Reorders `seq` so the result sits at index `n - 1` with no greater key to
    /// its left and no smaller key to its right. Returns `None` when `n` is zero
    /// or larger than `seq.len()`.
    pub fn quickselect<'a, T, K, F>(self, seq: &'a mut [T], n: usize, mut key: F) -> Option<&'a T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        if n == 0 || n > seq.len() {
            return None;
        }
        let target = n - 1;
        let (mut low, mut high) = (0, seq.len() - 1);
        loop {
            if low == high {
                return Some(&seq[low]);
            }
            self.place_pivot(seq, low, high, &mut key);
            let p = partition(seq, low, high, &mut key);
            match p.cmp(&target) {
                Ordering::Equal => return Some(&seq[p]),
                Ordering::Greater => high = p - 1,
                Ordering::Less => low = p + 1,
            }
        }
    }

    /// Sort `seq` in place by `key`. Not stable.
    ///
    /// Only the smaller side of each partition is sorted recursively, so stack
    /// depth stays logarithmic whatever the pivot quality.
    pub fn quicksort<T, K, F>(self, seq: &mut [T], mut key: F)
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        if seq.len() > 1 {
            self.sort_range(seq, 0, seq.len() - 1, &mut key);
        }
    }

    fn sort_range<T, K, F>(self, seq: &mut [T], mut low: usize, mut high: usize, key: &mut F)
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        while low < high {
            self.place_pivot(seq, low, high, key);
            let p = partition(seq, low, high, key);
            if p - low < high - p {
                if p > low {
                    self.sort_range(seq, low, p - 1, key);
                }
                low = p + 1;
            } else {
                if p < high {
                    self.sort_range(seq, p + 1, high, key);
                }
                // p > low here, otherwise the other branch was taken.
                high = p - 1;
            }
        }
    }

    /// The median of `seq`: the element at position `floor(len / 2) + 1`.
    pub fn median<'a, T, K, F>(self, seq: &'a mut [T], key: F) -> Option<&'a T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        let n = seq.len() / 2 + 1;
        self.quickselect(seq, n, key)
    }

    /// Split `seq` around its median.
    ///
    /// Returns `(left, median, right)` where `left` holds the `floor(len / 2)`
    /// elements selected below the median and `right` the rest. Empty input
    /// yields `([], None, [])`.
    pub fn median_with_left_right<T, K, F>(self, mut seq: Vec<T>, key: F) -> (Vec<T>, Option<T>, Vec<T>)
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        if seq.is_empty() {
            return (Vec::new(), None, Vec::new());
        }
        let mid = seq.len() / 2;
        // Selection reorders `seq` so the median sits at `mid`.
        let selected = self.quickselect(&mut seq, mid + 1, key).is_some();
        debug_assert!(selected, "median position is within a non-empty sequence");
        let right = seq.split_off(mid + 1);
        let median = seq.pop();
        (seq, median, right)
    }
}

/// [`Selector::quickselect`] with the default pivot rule.
pub fn quickselect<T, K, F>(seq: &mut [T], n: usize, key: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    Selector::default().quickselect(seq, n, key)
}

/// [`Selector::quicksort`] with the default pivot rule.
pub fn quicksort<T, K, F>(seq: &mut [T], key: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    Selector::default().quicksort(seq, key);
}

/// [`Selector::median`] with the default pivot rule.
pub fn median<T, K, F>(seq: &mut [T], key: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    Selector::default().median(seq, key)
}

/// [`Selector::median_with_left_right`] with the default pivot rule.
pub fn median_with_left_right<T, K, F>(seq: Vec<T>, key: F) -> (Vec<T>, Option<T>, Vec<T>)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    Selector::default().median_with_left_right(seq, key)
}
