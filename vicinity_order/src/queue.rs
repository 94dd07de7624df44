// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Min-priority queue over values that order themselves.

use crate::multiset::OrderedMultiset;

/// A min-priority queue backed by an [`OrderedMultiset`].
///
/// Values that compare equal collapse into one entry with a count, so the queue
/// hands back the first such value inserted once per enqueue. Use
/// [`KeyedPriorityQueue`](crate::KeyedPriorityQueue) when equal-priority values
/// must stay distinguishable.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    items: OrderedMultiset<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            items: OrderedMultiset::new(),
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The smallest queued value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.min_value()
    }
}

impl<T: Ord> PriorityQueue<T> {
    /// Queue `value`.
    pub fn enq(&mut self, value: T) {
        self.items.insert(value);
    }
}

impl<T: Ord + Clone> PriorityQueue<T> {
    /// Remove and return the smallest queued value.
    pub fn deq(&mut self) -> Option<T> {
        self.items.pop_min()
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
