// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The point capability consumed by [`PointIndex`](crate::PointIndex).

use crate::error::Result;
use crate::types::Axis;
use crate::util::abs_diff;

/// A 2D point that knows how to measure itself against others of its kind.
///
/// The index never computes distances itself. Everything goes through this
/// trait, so a point kind picks its own metric (planar, geographic, ...).
///
/// Implementations whose [`distance`](Point::distance) is not in coordinate units
/// must also override [`split_distance`](Point::split_distance) so nearest-point
/// pruning compares like with like.
pub trait Point {
    /// Horizontal coordinate.
    fn x(&self) -> f64;

    /// Vertical coordinate.
    fn y(&self) -> f64;

    /// Coordinate along `axis`.
    fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x(),
            Axis::Y => self.y(),
        }
    }

    /// Distance to `other`.
    ///
    /// Fails with [`Error::OperandMismatch`](crate::Error::OperandMismatch) when the
    /// two points have no meaningful common distance.
    fn distance(&self, other: &Self) -> Result<f64>;

    /// The candidate closest to `self` and its distance, skipping `None` entries.
    ///
    /// Earlier candidates win ties. With no candidates the result is
    /// `(None, f64::INFINITY)`.
    fn closest_of<'a>(&self, candidates: &[Option<&'a Self>]) -> Result<(Option<&'a Self>, f64)> {
        let mut best = None;
        let mut best_distance = f64::INFINITY;
        for candidate in candidates.iter().copied().flatten() {
            let d = self.distance(candidate)?;
            if best_distance > d {
                best_distance = d;
                best = Some(candidate);
            }
        }
        Ok((best, best_distance))
    }

    /// Lower bound on the distance from `self` to anything on the far side of the
    /// line through `node` perpendicular to `axis`.
    ///
    /// Must be expressed in the same units as [`distance`](Point::distance).
    fn split_distance(&self, node: &Self, axis: Axis) -> f64 {
        abs_diff(self.coord(axis), node.coord(axis))
    }

    /// A point of the same kind at `(x, y)`.
    #[must_use]
    fn moved_to(&self, x: f64, y: f64) -> Self
    where
        Self: Sized;
}
