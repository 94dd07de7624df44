// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::fmt;

use crate::point::Point;
use crate::util::{max_f, min_f};

/// Coordinate axis compared at one level of a [`PointIndex`](crate::PointIndex).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal coordinate.
    X,
    /// Vertical coordinate.
    Y,
}

impl Axis {
    /// The axis compared one level deeper: `X -> Y -> X`.
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Box edge compared at one level of a [`BoundingBoxIndex`](crate::BoundingBoxIndex).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge.
    MinX,
    /// Bottom edge.
    MinY,
    /// Right edge.
    MaxX,
    /// Top edge.
    MaxY,
}

impl Edge {
    /// The edge compared one level deeper: `MinX -> MinY -> MaxX -> MaxY -> MinX`.
    pub const fn next(self) -> Self {
        match self {
            Self::MinX => Self::MinY,
            Self::MinY => Self::MaxX,
            Self::MaxX => Self::MaxY,
            Self::MaxY => Self::MinX,
        }
    }
}

/// Axis-aligned bounding rectangle.
///
/// A populated bound has `min_x <= max_x` and `min_y <= max_y`.
/// [`Bound::EMPTY`] is the inverted sentinel `(+inf, -inf, +inf, -inf)`; merging
/// anything into it yields that thing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bound {
    /// Minimum x (left).
    pub min_x: f64,
    /// Maximum x (right).
    pub max_x: f64,
    /// Minimum y (bottom).
    pub min_y: f64,
    /// Maximum y (top).
    pub max_y: f64,
}

impl Default for Bound {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bound {
    /// The empty sentinel. Contains nothing and is the identity for [`Bound::merged`].
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Create a bound from its min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Smallest bound covering every point. Empty input yields [`Bound::EMPTY`].
    pub fn from_points<'a, P: Point + 'a>(points: impl IntoIterator<Item = &'a P>) -> Self {
        let mut bound = Self::EMPTY;
        for p in points {
            bound.extend_to(p.x(), p.y());
        }
        bound
    }

    /// True if the bound is the sentinel or otherwise inverted. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Grow this bound in place to cover `other`.
    pub fn merge_with(&mut self, other: Self) {
        *self = self.merged(other);
    }

    /// The smallest bound covering both `self` and `other`.
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            min_x: min_f(self.min_x, other.min_x),
            max_x: max_f(self.max_x, other.max_x),
            min_y: min_f(self.min_y, other.min_y),
            max_y: max_f(self.max_y, other.max_y),
        }
    }

    /// Grow this bound in place to cover the coordinate `(x, y)`.
    pub fn extend_to(&mut self, x: f64, y: f64) {
        self.min_x = min_f(self.min_x, x);
        self.max_x = max_f(self.max_x, x);
        self.min_y = min_f(self.min_y, y);
        self.max_y = max_f(self.max_y, y);
    }

    /// Whether `(x, y)` lies inside the bound. Edges are inclusive.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Whether `point` lies inside the bound. Edges are inclusive.
    pub fn contains<P: Point>(&self, point: &P) -> bool {
        self.contains_xy(point.x(), point.y())
    }

    /// Midpoint of the box.
    ///
    /// This is the centre of the rectangle, not a centroid of whatever the box was
    /// grown around.
    pub fn center(&self) -> (f64, f64) {
        (
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }

    /// Width, or zero for an inverted bound.
    pub fn width(&self) -> f64 {
        max_f(self.max_x - self.min_x, 0.0)
    }

    /// Height, or zero for an inverted bound.
    pub fn height(&self) -> f64 {
        max_f(self.max_y - self.min_y, 0.0)
    }

    /// Area, or zero for an inverted bound.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Coordinate of one edge.
    pub const fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::MinX => self.min_x,
            Edge::MinY => self.min_y,
            Edge::MaxX => self.max_x,
            Edge::MaxY => self.max_y,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x({}, {}), y({}, {})",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
