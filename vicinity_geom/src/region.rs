// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kurbo shapes as index shapes.

use kurbo::{BezPath, Point as KPoint, Rect};
use vicinity_index::{Bound, Error, Point, Result, Shape};

/// Convert a Kurbo rectangle to a [`Bound`], normalizing its corners.
pub fn rect_to_bound(r: Rect) -> Bound {
    let r = r.abs();
    Bound::new(r.x0, r.y0, r.x1, r.y1)
}

/// Convert a [`Bound`] to a Kurbo rectangle.
///
/// [`Bound::EMPTY`] maps to an inverted rectangle with infinite corners.
pub fn bound_to_rect(b: Bound) -> Rect {
    Rect::new(b.min_x, b.min_y, b.max_x, b.max_y)
}

/// A Kurbo shape with its bounding box cached as a [`Bound`].
///
/// Containment is Kurbo's non-zero winding test, so for open paths and points
/// exactly on an edge the answer follows Kurbo's conventions.
///
/// ```rust
/// use kurbo::Circle;
/// use vicinity_geom::{Pt, Region};
/// use vicinity_index::Shape;
///
/// let disc = Region::new(Circle::new((0.0, 0.0), 2.0));
/// assert!(disc.contains(&Pt::new(1.0, 1.0)));
/// assert!(!disc.contains(&Pt::new(1.9, 1.9)));
/// ```
#[derive(Clone, Debug)]
pub struct Region<S> {
    shape: S,
    bound: Bound,
}

impl<S: kurbo::Shape> Region<S> {
    /// Wrap `shape`, computing its bounding box once.
    pub fn new(shape: S) -> Self {
        let bound = rect_to_bound(shape.bounding_box());
        Self { shape, bound }
    }
}

impl<S> Region<S> {
    /// The wrapped Kurbo shape.
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Unwrap into the Kurbo shape.
    pub fn into_inner(self) -> S {
        self.shape
    }
}

impl Region<BezPath> {
    /// A closed polygon through `vertices` in order.
    ///
    /// Fails with [`Error::EmptyInput`] when no vertex is given.
    pub fn polygon<P: Into<KPoint>>(vertices: impl IntoIterator<Item = P>) -> Result<Self> {
        let mut path = BezPath::new();
        let mut vertices = vertices.into_iter().map(Into::into);
        let first = vertices.next().ok_or(Error::EmptyInput { what: "polygon" })?;
        path.move_to(first);
        for v in vertices {
            path.line_to(v);
        }
        path.close_path();
        Ok(Self::new(path))
    }
}

impl<S: kurbo::Shape> Shape for Region<S> {
    fn bounds(&self) -> Bound {
        self.bound
    }

    fn contains<P: Point>(&self, point: &P) -> bool {
        self.bound.contains(point)
            && kurbo::Shape::contains(&self.shape, KPoint::new(point.x(), point.y()))
    }
}
