// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vicinity_geom --heading-base-level=0

//! Vicinity Geom: Kurbo-native points and regions for the Vicinity indexes.
//!
//! [`vicinity_index`] is generic over what a point or a shape is. This crate
//! supplies the concrete kinds most callers need.
//!
//! - [`Pt`]: a planar point wrapping [`kurbo::Point`], measured by Euclidean distance.
//! - [`GeoPt`]: latitude/longitude, measured in great-circle kilometres on a
//!   sphere of radius [`EARTH_RADIUS_KM`].
//! - [`AnyPoint`]: either of the above; measuring one kind against the other fails
//!   with [`vicinity_index::Error::OperandMismatch`].
//! - [`Region`]: any [`kurbo::Shape`] (rectangles, circles, paths) with a cached
//!   [`Bound`](vicinity_index::Bound), ready for a
//!   [`BoundingBoxIndex`](vicinity_index::BoundingBoxIndex).
//!
//! # Example
//!
//! ```rust
//! use vicinity_geom::{GeoPt, Region};
//! use vicinity_index::{BoundingBoxIndex, PointIndex};
//!
//! // Nearest station to a query, in kilometres.
//! let stations = PointIndex::build([
//!     GeoPt::new(1.2840, 103.8510),
//!     GeoPt::new(1.3000, 103.8560),
//!     GeoPt::new(1.3521, 103.9446),
//! ])?;
//! let hit = stations.nearest(&GeoPt::new(1.2990, 103.8550))?;
//! assert_eq!(hit.point, Some(&GeoPt::new(1.3000, 103.8560)));
//! assert!(hit.distance < 0.2);
//!
//! // Which zone a point falls in. Here `x` is longitude and `y` latitude.
//! let zones = BoundingBoxIndex::build([
//!     (Region::polygon([(103.80, 1.27), (103.87, 1.27), (103.87, 1.32), (103.80, 1.32)])?, "central"),
//!     (Region::polygon([(103.90, 1.33), (104.00, 1.33), (103.95, 1.40)])?, "east"),
//! ])?;
//! assert_eq!(zones.find_shape(&GeoPt::new(1.2990, 103.8550)), Some(&"central"));
//! assert_eq!(zones.find_shape(&GeoPt::new(1.45, 103.70)), None);
//! # Ok::<(), vicinity_index::Error>(())
//! ```
//!
//! Nearest-point search with [`GeoPt`] measures longitude the short way round,
//! so it is exact across the antimeridian. An index's bound and center are plain
//! coordinate boxes and do not wrap.

pub mod any;
pub mod geo_pt;
pub mod pt;
pub mod region;

pub use any::AnyPoint;
pub use geo_pt::{EARTH_RADIUS_KM, GeoPt};
pub use pt::Pt;
pub use region::{Region, bound_to_rect, rect_to_bound};

#[cfg(test)]
mod tests {
    use super::*;
    use vicinity_index::{BoundingBoxIndex, Point, PointIndex};

    #[test]
    fn station_then_zone() {
        let stations = PointIndex::build([Pt::new(1.0, 1.0), Pt::new(8.0, 8.0)]).unwrap();
        let zones = BoundingBoxIndex::build([
            (Region::polygon([(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]).unwrap(), 1),
            (Region::polygon([(6.0, 6.0), (9.0, 6.0), (9.0, 10.0)]).unwrap(), 2),
        ])
        .unwrap();
        let hit = stations.nearest(&Pt::new(7.0, 7.5)).unwrap();
        let station = hit.point.unwrap();
        assert_eq!(zones.find_shape(station), Some(&2));
        assert_eq!(station.distance(&Pt::new(7.0, 7.5)).unwrap(), hit.distance);
    }
}
