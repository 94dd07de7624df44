// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority queue over values whose priority is derived by a key function.

use alloc::collections::{BTreeMap, VecDeque};
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::multiset::OrderedMultiset;

/// A min-priority queue whose order comes from `key_fn(&value)`.
///
/// Keys live in an [`OrderedMultiset`]; each key maps to the values queued under
/// it, and each value maps back to the key it was queued with. Values are told
/// apart by `Hash + Eq`, which must not depend on the key.
///
/// Values sharing a key come out first-in, first-out.
///
/// The key is read once, when the value is queued. If whatever `key_fn` reads
/// changes afterwards, call [`update`](Self::update) so the queue forgets the
/// stale key.
///
/// ```rust
/// use core::cell::Cell;
/// use vicinity_order::KeyedPriorityQueue;
///
/// // Jobs are ids; their priorities live outside the queue.
/// let priority = [Cell::new(2), Cell::new(1), Cell::new(2)];
/// let mut q = KeyedPriorityQueue::new(|job: &usize| priority[*job].get());
/// q.enq(0);
/// q.enq(1);
/// q.enq(2);
/// assert_eq!(q.peek(), Some(&1));
///
/// priority[2].set(0);
/// q.update(2);
/// assert_eq!(q.deq(), Some(2));
/// assert_eq!(q.deq(), Some(1));
/// assert_eq!(q.deq(), Some(0));
/// ```
pub struct KeyedPriorityQueue<V, K, F> {
    keys: OrderedMultiset<K>,
    buckets: BTreeMap<K, VecDeque<V>>,
    key_of: HashMap<V, K>,
    key_fn: F,
}

impl<V, K, F> Debug for KeyedPriorityQueue<V, K, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyedPriorityQueue")
            .field("len", &self.key_of.len())
            .field("distinct_keys", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl<V, K, F> KeyedPriorityQueue<V, K, F> {
    /// Create an empty queue ordering values by `key_fn`.
    pub fn new(key_fn: F) -> Self {
        Self {
            keys: OrderedMultiset::new(),
            buckets: BTreeMap::new(),
            key_of: HashMap::new(),
            key_fn,
        }
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.key_of.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.key_of.is_empty()
    }
}

impl<V, K, F> KeyedPriorityQueue<V, K, F>
where
    V: Hash + Eq + Clone,
    K: Ord + Clone,
    F: Fn(&V) -> K,
{
    /// Queue `value` under `key_fn(&value)`.
    ///
    /// A value that is already queued is re-keyed instead, as by
    /// [`update`](Self::update).
    pub fn enq(&mut self, value: V) {
        if let Some(old) = self.key_of.get(&value).cloned() {
            self.rekey(value, &old);
            return;
        }
        self.push(value);
    }

    /// Remove and return the value with the smallest key.
    pub fn deq(&mut self) -> Option<V> {
        let key = self.keys.min_value()?.clone();
        let bucket = self.buckets.get_mut(&key)?;
        let value = bucket.pop_front()?;
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        self.keys.delete(&key);
        self.key_of.remove(&value);
        Some(value)
    }

    /// The value [`deq`](Self::deq) would return, without removing it.
    pub fn peek(&self) -> Option<&V> {
        let key = self.keys.min_value()?;
        self.buckets.get(key)?.front()
    }

    /// Re-read the key of `value` and move it to its new place.
    ///
    /// The stale `(old key, value)` entry is dropped from the tree and both maps
    /// first. A value that was never queued is logged and queued fresh.
    pub fn update(&mut self, value: V) {
        match self.key_of.get(&value).cloned() {
            Some(old) => self.rekey(value, &old),
            None => {
                tracing::warn!("update of a value that is not queued; enqueuing it");
                self.push(value);
            }
        }
    }

    /// Drop `value` from the queue. Returns `false` if it was not queued.
    pub fn remove(&mut self, value: &V) -> bool {
        match self.key_of.get(value).cloned() {
            Some(old) => {
                self.detach(value, &old);
                true
            }
            None => false,
        }
    }

    /// True if `value` is queued.
    pub fn contains(&self, value: &V) -> bool {
        self.key_of.contains_key(value)
    }

    /// The key `value` was queued under.
    pub fn key_of(&self, value: &V) -> Option<&K> {
        self.key_of.get(value)
    }

    fn push(&mut self, value: V) {
        let key = (self.key_fn)(&value);
        self.keys.insert(key.clone());
        self.buckets
            .entry(key.clone())
            .or_default()
            .push_back(value.clone());
        self.key_of.insert(value, key);
    }

    fn rekey(&mut self, value: V, old: &K) {
        self.detach(&value, old);
        tracing::trace!(distinct_keys = self.buckets.len(), "re-keying queued value");
        self.push(value);
    }

    fn detach(&mut self, value: &V, old: &K) {
        if let Some(bucket) = self.buckets.get_mut(old) {
            if let Some(pos) = bucket.iter().position(|v| v == value) {
                bucket.remove(pos);
            }
            if bucket.is_empty() {
                self.buckets.remove(old);
            }
        }
        self.keys.delete(old);
        self.key_of.remove(value);
    }
}
