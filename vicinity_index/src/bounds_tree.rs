// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-box tree for point-in-shape lookup.
//!
//! Each node holds one shape with its value, the shape's own box, and a
//! `big_bound` covering the node and its whole subtree. The split key cycles
//! through the four box edges by depth (`min_x`, `min_y`, `max_x`, `max_y`).
//!
//! Lookups prune on `big_bound` only. Containment is not monotonic along the
//! split edge, so a point outside one node's shape is searched for in both
//! children.
//!
//! Shapes are expected to be disjoint. Overlap is not checked: with overlapping
//! shapes, [`find_shape`](BoundingBoxIndex::find_shape) reports the first match
//! in pre-order (node, then left subtree, then right subtree), which depends on
//! how the tree was built. Use [`find_shapes`](BoundingBoxIndex::find_shapes) to
//! see every match.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::select::{BuildOptions, Selector};
use crate::shape::Shape;
use crate::types::{Bound, Edge};
use crate::util::{NodeIdx, Side};

struct Node<S, V> {
    shape: S,
    value: V,
    bound: Bound,
    big_bound: Bound,
    edge: Edge,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

/// A tree of shapes answering "which shape contains this point".
pub struct BoundingBoxIndex<S, V> {
    root: Option<NodeIdx>,
    arena: Vec<Node<S, V>>,
    big_bound: Bound,
}

impl<S, V> Default for BoundingBoxIndex<S, V> {
    fn default() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            big_bound: Bound::EMPTY,
        }
    }
}

impl<S, V> Debug for BoundingBoxIndex<S, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundingBoxIndex")
            .field("len", &self.arena.len())
            .field("big_bound", &self.big_bound)
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

impl<S, V> BoundingBoxIndex<S, V> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored shapes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True if no shape is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Bound over every stored shape. [`Bound::EMPTY`] for an empty index.
    pub fn big_bound(&self) -> Bound {
        self.big_bound
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.big_bound = Bound::EMPTY;
    }

    /// Number of levels on the longest root-to-leaf path; zero when empty.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(NodeIdx, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            let node = &self.arena[idx.get()];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        tallest
    }

    /// Stored shapes and values in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &V)> + '_ {
        self.arena.iter().map(|n| (&n.shape, &n.value))
    }

    /// Tight bounds in left-root-right order. For diagnostics and export only.
    pub fn in_order(&self) -> Vec<Bound> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;
        loop {
            while let Some(idx) = cursor {
                stack.push(idx);
                cursor = self.arena[idx.get()].left;
            }
            let Some(idx) = stack.pop() else {
                break;
            };
            let node = &self.arena[idx.get()];
            out.push(node.bound);
            cursor = node.right;
        }
        out
    }

    /// Tight bounds in root-left-right order. For diagnostics and export only.
    pub fn pre_order(&self) -> Vec<Bound> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack: Vec<NodeIdx> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx.get()];
            out.push(node.bound);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    fn push(&mut self, node: Node<S, V>) -> NodeIdx {
        let idx = NodeIdx::new(self.arena.len());
        self.arena.push(node);
        idx
    }

    fn attach(&mut self, parent: Option<(NodeIdx, Side)>, child: NodeIdx) {
        match parent {
            None => self.root = Some(child),
            Some((p, Side::Left)) => self.arena[p.get()].left = Some(child),
            Some((p, Side::Right)) => self.arena[p.get()].right = Some(child),
        }
    }

    /// Walk nodes whose `big_bound` contains `point`, in pre-order.
    ///
    /// `on_node` returns whether to descend into that node's children.
    fn visit<'a, P: Point>(&'a self, point: &P, mut on_node: impl FnMut(&'a Node<S, V>) -> bool) {
        let mut stack: Vec<NodeIdx> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx.get()];
            if !node.big_bound.contains(point) {
                continue;
            }
            if !on_node(node) {
                continue;
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }
}

impl<S: Shape, V> BoundingBoxIndex<S, V> {
    /// Build a balanced index from `(shape, value)` pairs with default
    /// [`BuildOptions`].
    ///
    /// Fails with [`Error::EmptyInput`] when `entries` is empty; use
    /// [`new`](Self::new) for an index that starts empty.
    pub fn build(entries: impl IntoIterator<Item = (S, V)>) -> Result<Self> {
        Self::build_with(entries, BuildOptions::default())
    }

    /// Build a balanced index from `(shape, value)` pairs.
    ///
    /// Each subtree's root is the median of its shapes on that level's edge,
    /// found by quickselect with `options.pivot`.
    pub fn build_with(
        entries: impl IntoIterator<Item = (S, V)>,
        options: BuildOptions,
    ) -> Result<Self> {
        let items: Vec<(Bound, S, V)> = entries
            .into_iter()
            .map(|(shape, value)| (shape.bounds(), shape, value))
            .collect();
        if items.is_empty() {
            return Err(Error::EmptyInput {
                what: "bounding-box index",
            });
        }
        let selector = Selector::new(options.pivot);
        let mut tree = Self {
            root: None,
            arena: Vec::with_capacity(items.len()),
            big_bound: Bound::EMPTY,
        };
        let mut pending = vec![(items, Edge::MinX, None)];
        while let Some((items, edge, parent)) = pending.pop() {
            let big_bound = items
                .iter()
                .fold(Bound::EMPTY, |acc, (bound, ..)| acc.merged(*bound));
            let (left, median, right) =
                selector.median_with_left_right(items, |item: &(Bound, S, V)| item.0.edge(edge));
            let Some((bound, shape, value)) = median else {
                continue;
            };
            tree.big_bound.merge_with(bound);
            let idx = tree.push(Node {
                shape,
                value,
                bound,
                big_bound,
                edge,
                left: None,
                right: None,
            });
            tree.attach(parent, idx);
            if !right.is_empty() {
                pending.push((right, edge.next(), Some((idx, Side::Right))));
            }
            if !left.is_empty() {
                pending.push((left, edge.next(), Some((idx, Side::Left))));
            }
        }
        tracing::debug!(
            shapes = tree.len(),
            height = tree.height(),
            "built bounding-box index"
        );
        Ok(tree)
    }

    /// Insert one shape without rebalancing.
    ///
    /// Descends comparing the new shape's box against each node's box on that
    /// node's edge (ties go left), growing every visited `big_bound`.
    pub fn insert(&mut self, shape: S, value: V) {
        let bound = shape.bounds();
        self.big_bound.merge_with(bound);
        let Some(mut cursor) = self.root else {
            let idx = self.push(Node {
                shape,
                value,
                bound,
                big_bound: bound,
                edge: Edge::MinX,
                left: None,
                right: None,
            });
            self.root = Some(idx);
            return;
        };
        loop {
            let node = &mut self.arena[cursor.get()];
            node.big_bound.merge_with(bound);
            let side = if bound.edge(node.edge) <= node.bound.edge(node.edge) {
                Side::Left
            } else {
                Side::Right
            };
            let next = match side {
                Side::Left => node.left,
                Side::Right => node.right,
            };
            match next {
                Some(child) => cursor = child,
                None => {
                    let edge = node.edge.next();
                    let idx = self.push(Node {
                        shape,
                        value,
                        bound,
                        big_bound: bound,
                        edge,
                        left: None,
                        right: None,
                    });
                    self.attach(Some((cursor, side)), idx);
                    return;
                }
            }
        }
    }

    /// Value of the shape containing `point`, or `None` if no shape does.
    ///
    /// Subtrees whose `big_bound` misses the point are pruned; otherwise the
    /// node's own shape is tested and, on a miss, both children are searched.
    pub fn find_shape<P: Point>(&self, point: &P) -> Option<&V> {
        let mut found = None;
        self.visit(point, |node| {
            if found.is_some() {
                return false;
            }
            if node.shape.contains(point) {
                found = Some(&node.value);
                return false;
            }
            true
        });
        found
    }

    /// Values of every shape containing `point`, in pre-order.
    pub fn find_shapes<P: Point>(&self, point: &P) -> Vec<&V> {
        let mut out = Vec::new();
        self.visit(point, |node| {
            if node.shape.contains(point) {
                out.push(&node.value);
            }
            true
        });
        out
    }

    /// Tight bounds of every node visited while searching for `point`.
    ///
    /// These are the nodes whose `big_bound` contains the point, in pre-order;
    /// their own bounds need not contain it. For diagnostics only.
    pub fn find_bounds_containing<P: Point>(&self, point: &P) -> Vec<Bound> {
        let mut out = Vec::new();
        self.visit(point, |node| {
            out.push(node.bound);
            true
        });
        out
    }
}

impl<S: Shape, V> Extend<(S, V)> for BoundingBoxIndex<S, V> {
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        for (shape, value) in iter {
            self.insert(shape, value);
        }
    }
}
