// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Either kind of point behind one type.

use vicinity_index::{Axis, Error, Point, Result};

use crate::geo_pt::GeoPt;
use crate::pt::Pt;

/// A planar or geographic point.
///
/// Lets one collection hold both kinds. Measuring a planar point against a
/// geographic one fails with [`Error::OperandMismatch`] rather than mixing
/// units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnyPoint {
    /// Plane coordinates, Euclidean distance.
    Planar(Pt),
    /// Latitude/longitude, great-circle kilometres.
    Geo(GeoPt),
}

impl AnyPoint {
    /// Name of the point kind, as reported in errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Planar(_) => "planar",
            Self::Geo(_) => "geographic",
        }
    }

    fn mismatch(&self, other: &Self) -> Error {
        Error::OperandMismatch {
            left: self.kind(),
            right: other.kind(),
        }
    }
}

impl From<Pt> for AnyPoint {
    fn from(p: Pt) -> Self {
        Self::Planar(p)
    }
}

impl From<GeoPt> for AnyPoint {
    fn from(p: GeoPt) -> Self {
        Self::Geo(p)
    }
}

impl Point for AnyPoint {
    fn x(&self) -> f64 {
        match self {
            Self::Planar(p) => p.x(),
            Self::Geo(p) => p.x(),
        }
    }

    fn y(&self) -> f64 {
        match self {
            Self::Planar(p) => p.y(),
            Self::Geo(p) => p.y(),
        }
    }

    fn distance(&self, other: &Self) -> Result<f64> {
        match (self, other) {
            (Self::Planar(a), Self::Planar(b)) => a.distance(b),
            (Self::Geo(a), Self::Geo(b)) => a.distance(b),
            _ => Err(self.mismatch(other)),
        }
    }

    fn split_distance(&self, node: &Self, axis: Axis) -> f64 {
        match (self, node) {
            (Self::Planar(a), Self::Planar(b)) => a.split_distance(b, axis),
            (Self::Geo(a), Self::Geo(b)) => a.split_distance(b, axis),
            // Never pruned on: the distance to `node` fails first.
            _ => 0.0,
        }
    }

    fn moved_to(&self, x: f64, y: f64) -> Self {
        match self {
            Self::Planar(p) => Self::Planar(p.moved_to(x, y)),
            Self::Geo(p) => Self::Geo(p.moved_to(x, y)),
        }
    }
}
