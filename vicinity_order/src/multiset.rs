// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AVL-balanced ordered multiset with duplicate counts and subtree weights.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    /// Copies of `key` held by this node.
    count: usize,
    height: usize,
    /// `count` plus the weights of both subtrees.
    weight: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            count: 1,
            height: 1,
            weight: 1,
            left: None,
            right: None,
        })
    }

    fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
        self.weight = self.count + weight(&self.left) + weight(&self.right);
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

fn weight<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.weight)
}

fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    tracing::trace!("rotate right");
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    tracing::trace!("rotate left");
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

/// Restore balance at `node` from balance factors alone. Children must already
/// be balanced and `node` updated.
fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let bf = node.balance_factor();
    if bf > 1 {
        if node.left.as_ref().is_some_and(|l| l.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if bf < -1 {
        if node.right.as_ref().is_some_and(|r| r.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Insert `key` below `link`. Returns the new subtree root, the direction taken
/// at that root and whether a new node was created.
fn insert<K: Ord>(link: Link<K>, key: K) -> (Box<Node<K>>, Ordering, bool) {
    let Some(mut node) = link else {
        return (Node::leaf(key), Ordering::Equal, true);
    };
    let dir = key.cmp(&node.key);
    let created = match dir {
        Ordering::Equal => {
            node.count += 1;
            node.weight += 1;
            return (node, dir, false);
        }
        Ordering::Less => {
            let (child, child_dir, created) = insert(node.left.take(), key);
            node.left = Some(child);
            node.update();
            if node.balance_factor() > 1 {
                if child_dir == Ordering::Greater {
                    node.left = node.left.take().map(rotate_left);
                }
                node = rotate_right(node);
            }
            created
        }
        Ordering::Greater => {
            let (child, child_dir, created) = insert(node.right.take(), key);
            node.right = Some(child);
            node.update();
            if node.balance_factor() < -1 {
                if child_dir == Ordering::Less {
                    node.right = node.right.take().map(rotate_right);
                }
                node = rotate_left(node);
            }
            created
        }
    };
    (node, dir, created)
}

/// Detach the leftmost node of the subtree rooted at `node`.
///
/// Returns the rebalanced remainder and the detached node with its full count.
fn take_min<K>(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            node.update();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            node.update();
            (Some(rebalance(node)), min)
        }
    }
}

/// Outcome of removing one copy of a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Removed {
    Absent,
    /// A duplicate count went down; the node stays.
    Copy,
    Node,
}

fn remove<K: Ord>(link: Link<K>, key: &K) -> (Link<K>, Removed) {
    let Some(mut node) = link else {
        return (None, Removed::Absent);
    };
    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (rest, removed) = remove(node.left.take(), key);
            node.left = rest;
            removed
        }
        Ordering::Greater => {
            let (rest, removed) = remove(node.right.take(), key);
            node.right = rest;
            removed
        }
        Ordering::Equal if node.count > 1 => {
            node.count -= 1;
            node.weight -= 1;
            return (Some(node), Removed::Copy);
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Removed::Node),
            (Some(child), None) | (None, Some(child)) => return (Some(child), Removed::Node),
            (Some(left), Some(right)) => {
                let (rest, mut successor) = take_min(right);
                successor.left = Some(left);
                successor.right = rest;
                node = successor;
                Removed::Node
            }
        },
    };
    if removed == Removed::Absent {
        return (Some(node), removed);
    }
    node.update();
    (Some(rebalance(node)), removed)
}

/// A sorted multiset with logarithmic insert, delete and rank queries.
///
/// Keys that compare equal share one node with a duplicate count. The node keeps
/// the first key inserted; later equal keys only bump the count, so keys that
/// compare equal must be interchangeable for the caller.
///
/// Every node satisfies `|height(left) - height(right)| <= 1` and
/// `weight == count + weight(left) + weight(right)` after each operation.
pub struct OrderedMultiset<K> {
    root: Link<K>,
    distinct: usize,
}

impl<K> Default for OrderedMultiset<K> {
    fn default() -> Self {
        Self {
            root: None,
            distinct: 0,
        }
    }
}

impl<K> Debug for OrderedMultiset<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderedMultiset")
            .field("len", &self.len())
            .field("distinct_len", &self.distinct)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl<K> OrderedMultiset<K> {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys, counting duplicates.
    pub fn len(&self) -> usize {
        weight(&self.root)
    }

    /// Number of distinct keys.
    pub fn distinct_len(&self) -> usize {
        self.distinct
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; zero when empty.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.root = None;
        self.distinct = 0;
    }

    /// Smallest key, or `None` when empty.
    pub fn min_value(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Largest key, or `None` when empty.
    pub fn max_value(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// The key at 1-indexed `rank` in sorted order, counting duplicates.
    ///
    /// Inverse of [`rank`](Self::rank). `None` for rank zero or past the end.
    pub fn select(&self, rank: usize) -> Option<&K> {
        let mut remaining = rank;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            let below = weight(&node.left);
            if remaining <= below {
                cursor = node.left.as_deref();
            } else if remaining <= below + node.count {
                return Some(&node.key);
            } else {
                remaining -= below + node.count;
                cursor = node.right.as_deref();
            }
        }
        None
    }

    /// Keys in ascending order with duplicates repeated.
    pub fn in_order(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            out.extend(core::iter::repeat_n(&node.key, node.count));
            cursor = node.right.as_deref();
        }
        out
    }

    /// Distinct keys in root-left-right order. For diagnostics only.
    pub fn pre_order(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.distinct);
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }
}

impl<K: Ord> OrderedMultiset<K> {
    fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Add one copy of `key`.
    pub fn insert(&mut self, key: K) {
        let (root, _, created) = insert(self.root.take(), key);
        self.root = Some(root);
        if created {
            self.distinct += 1;
        }
    }

    /// Remove one copy of `key`. Returns `false` if it was not present.
    pub fn delete(&mut self, key: &K) -> bool {
        let (root, removed) = remove(self.root.take(), key);
        self.root = root;
        match removed {
            Removed::Absent => false,
            Removed::Copy => true,
            Removed::Node => {
                self.distinct -= 1;
                true
            }
        }
    }

    /// Copies of `key` currently stored.
    pub fn count(&self, key: &K) -> usize {
        self.find(key).map_or(0, |n| n.count)
    }

    /// True if at least one copy of `key` is stored.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// 1-indexed position of `key` in sorted order: one more than the number of
    /// stored keys (duplicates included) strictly less than `key`.
    ///
    /// Defined for absent keys too, as the position `key` would take.
    pub fn rank(&self, key: &K) -> usize {
        let mut below = 0;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => {
                    below += node.weight - weight(&node.right);
                    cursor = node.right.as_deref();
                }
                Ordering::Equal => {
                    below += weight(&node.left);
                    break;
                }
            }
        }
        below + 1
    }
}

impl<K: Ord + Clone> OrderedMultiset<K> {
    /// Remove one copy of the smallest key and return it.
    pub fn pop_min(&mut self) -> Option<K> {
        let key = self.min_value()?.clone();
        self.delete(&key);
        Some(key)
    }
}

impl<K: Ord> Extend<K> for OrderedMultiset<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedMultiset<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
