// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shape capability consumed by [`BoundingBoxIndex`](crate::BoundingBoxIndex).

use crate::point::Point;
use crate::types::Bound;

/// A region of the plane with a bounding box and a containment test.
///
/// `contains` must imply `bounds().contains`; the index prunes on the box and only
/// calls `contains` for points inside it.
pub trait Shape {
    /// Axis-aligned box enclosing the shape.
    fn bounds(&self) -> Bound;

    /// Whether the shape covers `point`.
    fn contains<P: Point>(&self, point: &P) -> bool;
}

impl Shape for Bound {
    fn bounds(&self) -> Bound {
        *self
    }

    fn contains<P: Point>(&self, point: &P) -> bool {
        Self::contains(self, point)
    }
}
