// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Balanced point tree for nearest-point queries.
//!
//! Nodes split alternately on `x` and `y` by depth, starting with `x`. A bulk
//! [`build`](PointIndex::build) places each subtree's median at its root, giving
//! `O(log n)` depth. [`insert`](PointIndex::insert) after that is a plain binary
//! descent and never rebalances; a long run of inserts in sorted order degrades
//! toward a list. Nodes live in an arena and every walk uses an explicit stack,
//! so a degraded tree costs time but not call stack.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::select::{BuildOptions, Selector};
use crate::types::{Axis, Bound};
use crate::util::{NodeIdx, Side};

struct Node<P> {
    point: P,
    axis: Axis,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

impl<P: Point> Node<P> {
    /// `(near, far)`: the child on the query's side of this node's split, then the other.
    fn branches(&self, query: &P) -> (Option<NodeIdx>, Option<NodeIdx>) {
        if query.coord(self.axis) < self.point.coord(self.axis) {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }
}

/// Result of [`PointIndex::nearest`].
///
/// An empty index answers with [`Nearest::none`]: no point, infinite distance.
#[derive(Debug)]
pub struct Nearest<'a, P> {
    /// The closest stored point, if any.
    pub point: Option<&'a P>,
    /// Distance to `point` as reported by the point's own metric.
    pub distance: f64,
}

impl<P> Clone for Nearest<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Nearest<'_, P> {}

impl<P> Nearest<'_, P> {
    /// The empty answer: no point at infinite distance.
    pub const fn none() -> Self {
        Self {
            point: None,
            distance: f64::INFINITY,
        }
    }

    /// True when no point was found.
    pub const fn is_none(&self) -> bool {
        self.point.is_none()
    }
}

/// A 2D point tree answering nearest-point queries.
///
/// The index owns its points. Queries take `&self` and never mutate; callers
/// must not interleave them with [`insert`](Self::insert) on the same index.
pub struct PointIndex<P> {
    root: Option<NodeIdx>,
    arena: Vec<Node<P>>,
    bound: Bound,
}

impl<P> Default for PointIndex<P> {
    fn default() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            bound: Bound::EMPTY,
        }
    }
}

impl<P> Debug for PointIndex<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointIndex")
            .field("len", &self.arena.len())
            .field("bound", &self.bound)
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

impl<P> PointIndex<P> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            root: None,
            arena: Vec::with_capacity(n),
            bound: Bound::EMPTY,
        }
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True if no point is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Bound over every inserted point. [`Bound::EMPTY`] for an empty index.
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Midpoint of [`bound`](Self::bound), or `None` for an empty index.
    pub fn center(&self) -> Option<(f64, f64)> {
        (!self.is_empty()).then(|| self.bound.center())
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.bound = Bound::EMPTY;
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

    /// Stored points in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.arena.iter().map(|n| &n.point)
    }

    /// Points in left-root-right order. For diagnostics and export only.
    pub fn in_order(&self) -> Vec<&P> {
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
            out.push(&node.point);
            cursor = node.right;
        }
        out
    }

    /// Points in root-left-right order. For diagnostics and export only.
    pub fn pre_order(&self) -> Vec<&P> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack: Vec<NodeIdx> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx.get()];
            out.push(&node.point);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    fn push(&mut self, point: P, axis: Axis) -> NodeIdx {
        let idx = NodeIdx::new(self.arena.len());
        self.arena.push(Node {
            point,
            axis,
            left: None,
            right: None,
        });
        idx
    }

    fn attach(&mut self, parent: Option<(NodeIdx, Side)>, child: NodeIdx) {
        match parent {
            None => self.root = Some(child),
            Some((p, Side::Left)) => self.arena[p.get()].left = Some(child),
            Some((p, Side::Right)) => self.arena[p.get()].right = Some(child),
        }
    }
}

impl<P: Point> PointIndex<P> {
    /// Build a balanced index from `points` with default [`BuildOptions`].
    ///
    /// Fails with [`Error::EmptyInput`] when `points` is empty; use
    /// [`new`](Self::new) for an index that starts empty.
    pub fn build(points: impl IntoIterator<Item = P>) -> Result<Self> {
        Self::build_with(points, BuildOptions::default())
    }

    /// Build a balanced index from `points`.
    ///
    /// Each subtree's root is the median of its points on that level's axis,
    /// found by quickselect with `options.pivot`.
    pub fn build_with(points: impl IntoIterator<Item = P>, options: BuildOptions) -> Result<Self> {
        let points: Vec<P> = points.into_iter().collect();
        if points.is_empty() {
            return Err(Error::EmptyInput {
                what: "point index",
            });
        }
        let selector = Selector::new(options.pivot);
        let mut tree = Self::with_capacity(points.len());
        let mut pending = vec![(points, Axis::X, None)];
        while let Some((items, axis, parent)) = pending.pop() {
            let (left, median, right) =
                selector.median_with_left_right(items, |p: &P| p.coord(axis));
            let Some(point) = median else {
                continue;
            };
            tree.bound.extend_to(point.x(), point.y());
            let idx = tree.push(point, axis);
            tree.attach(parent, idx);
            if !right.is_empty() {
                pending.push((right, axis.next(), Some((idx, Side::Right))));
            }
            if !left.is_empty() {
                pending.push((left, axis.next(), Some((idx, Side::Left))));
            }
        }
        tracing::debug!(
            points = tree.len(),
            height = tree.height(),
            "built point index"
        );
        Ok(tree)
    }

    /// Insert one point without rebalancing.
    ///
    /// Descends comparing the coordinate on each node's axis; ties go left.
    pub fn insert(&mut self, point: P) {
        self.bound.extend_to(point.x(), point.y());
        let Some(mut cursor) = self.root else {
            let idx = self.push(point, Axis::X);
            self.root = Some(idx);
            return;
        };
        loop {
            let node = &self.arena[cursor.get()];
            let side = if point.coord(node.axis) <= node.point.coord(node.axis) {
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
                    let axis = node.axis.next();
                    let idx = self.push(point, axis);
                    self.attach(Some((cursor, side)), idx);
                    return;
                }
            }
        }
    }

    /// Insert every point in turn. See [`insert`](Self::insert).
    pub fn insert_all(&mut self, points: impl IntoIterator<Item = P>) {
        for p in points {
            self.insert(p);
        }
    }

    /// The stored point closest to `query` under the point's own metric.
    ///
    /// Branch and bound: descend the near side first, keep the closer of that
    /// result and the node's own point, then visit the far side only if the best
    /// distance so far reaches across the split
    /// ([`Point::split_distance`]). Ties between equally close points are broken
    /// by [`Point::closest_of`].
    ///
    /// An empty index answers [`Nearest::none`]. Errors from the point's
    /// distance (mismatched kinds) are returned as-is.
    pub fn nearest(&self, query: &P) -> Result<Nearest<'_, P>> {
        enum Step {
            Enter(NodeIdx),
            Settle(NodeIdx),
            MergeFar,
        }

        let Some(root) = self.root else {
            return Ok(Nearest::none());
        };
        let mut steps = vec![Step::Enter(root)];
        // Best candidate of each finished subtree, innermost last.
        let mut found: Vec<(Option<&P>, f64)> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(idx) => {
                    steps.push(Step::Settle(idx));
                    match self.arena[idx.get()].branches(query).0 {
                        Some(near) => steps.push(Step::Enter(near)),
                        None => found.push((None, f64::INFINITY)),
                    }
                }
                Step::Settle(idx) => {
                    let node = &self.arena[idx.get()];
                    let (near_best, _) = found.pop().unwrap_or((None, f64::INFINITY));
                    let best = query.closest_of(&[near_best, Some(&node.point)])?;
                    match node.branches(query).1 {
                        Some(far) if best.1 >= query.split_distance(&node.point, node.axis) => {
                            found.push(best);
                            steps.push(Step::MergeFar);
                            steps.push(Step::Enter(far));
                        }
                        _ => found.push(best),
                    }
                }
                Step::MergeFar => {
                    let (far_best, _) = found.pop().unwrap_or((None, f64::INFINITY));
                    let (best, _) = found.pop().unwrap_or((None, f64::INFINITY));
                    found.push(query.closest_of(&[far_best, best])?);
                }
            }
        }
        let (point, distance) = found.pop().unwrap_or((None, f64::INFINITY));
        Ok(Nearest { point, distance })
    }
}

impl<P: Point> Extend<P> for PointIndex<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
