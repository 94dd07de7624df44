// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar point measured by Euclidean distance.

use kurbo::Point as KPoint;
use vicinity_index::{Point, Result};

/// A point in the plane, wrapping a Kurbo [`Point`](KPoint).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pt(pub KPoint);

impl Pt {
    /// Create a point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self(KPoint::new(x, y))
    }
}

impl From<KPoint> for Pt {
    fn from(p: KPoint) -> Self {
        Self(p)
    }
}

impl From<Pt> for KPoint {
    fn from(p: Pt) -> Self {
        p.0
    }
}

impl From<(f64, f64)> for Pt {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Point for Pt {
    fn x(&self) -> f64 {
        self.0.x
    }

    fn y(&self) -> f64 {
        self.0.y
    }

    fn distance(&self, other: &Self) -> Result<f64> {
        Ok(self.0.distance(other.0))
    }

    fn moved_to(&self, x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vicinity_index::PointIndex;

    #[test]
    fn euclidean_distance() {
        let d = Pt::new(0.0, 0.0).distance(&Pt::new(3.0, 4.0)).unwrap();
        assert_eq!(d, 5.0);
    }

    #[test]
    fn scenario_nearest_of_five() {
        let index = PointIndex::build(
            [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)].map(Pt::from),
        )
        .unwrap();
        let hit = index.nearest(&Pt::new(1.0, 0.9)).unwrap();
        assert_eq!(hit.point, Some(&Pt::new(1.0, 1.0)));
        assert!((hit.distance - 0.1).abs() < 1e-12);
    }

    #[test]
    fn converts_to_and_from_kurbo() {
        let p: Pt = KPoint::new(1.5, -2.0).into();
        assert_eq!(p.moved_to(4.0, 5.0), Pt::new(4.0, 5.0));
        assert_eq!(KPoint::from(p), KPoint::new(1.5, -2.0));
    }
}
