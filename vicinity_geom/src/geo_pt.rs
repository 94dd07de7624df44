// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Latitude/longitude point measured along a sphere.

use core::f64::consts::FRAC_PI_2;

use vicinity_index::{Axis, Point, Result};

/// Mean Earth radius used for every geographic distance, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in degrees.
///
/// As a [`Point`], `x` is the longitude and `y` the latitude. Distances are
/// great-circle kilometres on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// Ranking and pruning measure longitude the short way round, so nearest-point
/// search is exact across the antimeridian. An index's [`bound`] and [`center`]
/// are plain coordinate boxes and do not wrap: points either side of ±180°
/// report a bound spanning nearly every longitude.
///
/// [`bound`]: vicinity_index::PointIndex::bound
/// [`center`]: vicinity_index::PointIndex::center
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GeoPt {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lon: f64,
}

impl GeoPt {
    /// Create a point from latitude and longitude in degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance to `other` in kilometres.
    pub fn haversine_km(&self, other: &Self) -> f64 {
        let (phi1, phi2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_phi = phi2 - phi1;
        let d_lambda = (other.lon - self.lon).to_radians();
        let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }

    /// Squared equirectangular distance in radians².
    ///
    /// Ranks nearby candidates the same way the haversine does, at a fraction
    /// of the cost. Not a distance in its own right.
    fn equirectangular_sq(&self, other: &Self) -> f64 {
        let mean_phi = ((self.lat + other.lat) / 2.0).to_radians();
        let x = lon_gap(self.lon, other.lon).to_radians() * mean_phi.cos();
        let y = (other.lat - self.lat).to_radians();
        x * x + y * y
    }

    /// Great-circle kilometres to the nearest point of the meridian at `lon`.
    fn meridian_km(&self, lon: f64) -> f64 {
        let d_lambda = lon_gap(self.lon, lon).to_radians().min(FRAC_PI_2);
        EARTH_RADIUS_KM * (self.lat.to_radians().cos() * d_lambda.sin()).asin()
    }
}

/// Absolute longitude difference the short way round, in `[0, 180]` degrees.
fn lon_gap(a: f64, b: f64) -> f64 {
    let d = (b - a).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

impl Point for GeoPt {
    fn x(&self) -> f64 {
        self.lon
    }

    fn y(&self) -> f64 {
        self.lat
    }

    fn distance(&self, other: &Self) -> Result<f64> {
        Ok(self.haversine_km(other))
    }

    /// Ranks candidates by the equirectangular approximation and reports the
    /// haversine distance of the winner.
    fn closest_of<'a>(&self, candidates: &[Option<&'a Self>]) -> Result<(Option<&'a Self>, f64)> {
        let mut best = None;
        let mut best_rank = f64::INFINITY;
        for candidate in candidates.iter().copied().flatten() {
            let rank = self.equirectangular_sq(candidate);
            if best_rank > rank {
                best_rank = rank;
                best = Some(candidate);
            }
        }
        Ok((best, best.map_or(f64::INFINITY, |b| self.haversine_km(b))))
    }

    /// Great-circle kilometres from `self` to the far side of the split at `node`.
    ///
    /// For [`Axis::Y`] that is the distance to the parallel through `node`. For
    /// [`Axis::X`] the far side is the band of longitudes between `node`'s
    /// meridian and the antimeridian, so the bound is the nearer of the two.
    fn split_distance(&self, node: &Self, axis: Axis) -> f64 {
        match axis {
            Axis::Y => (node.lat - self.lat).abs().to_radians() * EARTH_RADIUS_KM,
            Axis::X => self.meridian_km(node.lon).min(self.meridian_km(180.0)),
        }
    }

    fn moved_to(&self, x: f64, y: f64) -> Self {
        Self::new(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use vicinity_index::PointIndex;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn one_degree_of_longitude_on_the_equator() {
        let d = GeoPt::new(0.0, 0.0).distance(&GeoPt::new(0.0, 1.0)).unwrap();
        assert!(close(d, EARTH_RADIUS_KM.to_radians(), 1e-9), "{d}");
    }

    #[test]
    fn pole_to_pole_is_half_circumference() {
        let d = GeoPt::new(90.0, 0.0).haversine_km(&GeoPt::new(-90.0, 0.0));
        assert!(close(d, core::f64::consts::PI * EARTH_RADIUS_KM, 1e-6), "{d}");
    }

    #[test]
    fn known_city_pair() {
        // Singapore to Kuala Lumpur, roughly 309 km.
        let sin = GeoPt::new(1.3521, 103.8198);
        let kul = GeoPt::new(3.1390, 101.6869);
        let d = sin.distance(&kul).unwrap();
        assert!(close(d, 309.0, 10.0), "{d}");
        assert_eq!(d, kul.distance(&sin).unwrap());
    }

    #[test]
    fn axes_map_to_lon_and_lat() {
        let p = GeoPt::new(10.0, 20.0);
        assert_eq!((p.x(), p.y()), (20.0, 10.0));
        assert_eq!(p.moved_to(30.0, -5.0), GeoPt::new(-5.0, 30.0));
    }

    #[test]
    fn split_distance_bounds_far_side() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let q = GeoPt::new(rng.random_range(-80.0..80.0), rng.random_range(-170.0..170.0));
            let node = GeoPt::new(rng.random_range(-80.0..80.0), rng.random_range(-170.0..170.0));
            // Any point on the node's meridian or parallel is at least this far.
            let on_meridian = GeoPt::new(rng.random_range(-89.0..89.0), node.lon);
            let on_parallel = GeoPt::new(node.lat, rng.random_range(-179.0..179.0));
            let eps = 1e-6;
            assert!(q.split_distance(&node, Axis::X) <= q.haversine_km(&on_meridian) + eps);
            assert!(q.split_distance(&node, Axis::Y) <= q.haversine_km(&on_parallel) + eps);
        }
    }

    #[test]
    fn split_distance_is_reached_on_the_parallel() {
        let q = GeoPt::new(1.0, 103.0);
        let node = GeoPt::new(1.5, 104.0);
        let across = q.split_distance(&node, Axis::Y);
        assert!(close(across, q.haversine_km(&GeoPt::new(1.5, 103.0)), 1e-9));
    }

    #[test]
    fn closest_of_reports_haversine_of_winner() {
        let q = GeoPt::new(1.30, 103.80);
        let a = GeoPt::new(1.35, 103.85);
        let b = GeoPt::new(1.31, 103.81);
        let (best, d) = q.closest_of(&[Some(&a), None, Some(&b)]).unwrap();
        assert_eq!(best, Some(&b));
        assert_eq!(d, q.haversine_km(&b));
        let (none, inf) = q.closest_of(&[None]).unwrap();
        assert!(none.is_none() && inf.is_infinite());
    }

    #[test]
    fn closest_of_looks_across_the_antimeridian() {
        let q = GeoPt::new(0.0, 179.9);
        let west = GeoPt::new(0.0, 178.0);
        let east = GeoPt::new(0.0, -179.9);
        let (best, d) = q.closest_of(&[Some(&west), Some(&east)]).unwrap();
        assert_eq!(best, Some(&east));
        assert!(close(d, q.haversine_km(&east), 1e-12));
        assert!(d < q.haversine_km(&west));
    }

    #[test]
    fn split_distance_bounds_points_past_the_antimeridian() {
        let q = GeoPt::new(0.0, -179.5);
        let node = GeoPt::new(0.0, 0.0);
        // The far side of `node` holds lon 179.9, about 67 km from `q`.
        let beyond = GeoPt::new(0.0, 179.9);
        assert!(q.split_distance(&node, Axis::X) <= q.haversine_km(&beyond));
        assert_eq!(lon_gap(179.0, -179.0), 2.0);
        assert_eq!(lon_gap(-10.0, 370.0), 20.0);
    }

    #[test]
    fn nearest_across_the_antimeridian_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(180);
        let points: Vec<GeoPt> = (0..200)
            .map(|_| {
                let lon = if rng.random_bool(0.5) {
                    rng.random_range(170.0..180.0)
                } else {
                    rng.random_range(-180.0..-170.0)
                };
                GeoPt::new(rng.random_range(-5.0..5.0), lon)
            })
            .collect();
        let index = PointIndex::build(points.iter().copied()).unwrap();
        for _ in 0..300 {
            let lon = if rng.random_bool(0.5) {
                rng.random_range(-180.0..-179.0)
            } else {
                rng.random_range(179.0..180.0)
            };
            let q = GeoPt::new(rng.random_range(-6.0..6.0), lon);
            let hit = index.nearest(&q).unwrap();
            let brute = points
                .iter()
                .map(|p| q.haversine_km(p))
                .fold(f64::INFINITY, f64::min);
            // Ranking is approximate, so near ties may resolve either way.
            assert!(hit.distance >= brute - 1e-9, "{} vs {brute}", hit.distance);
            assert!(hit.distance <= brute * 1.001 + 1e-9, "{} vs {brute}", hit.distance);
        }
    }

    #[test]
    fn nearest_station_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(2024);
        let stations: Vec<GeoPt> = (0..400)
            .map(|_| GeoPt::new(rng.random_range(1.2..1.47), rng.random_range(103.6..104.05)))
            .collect();
        let index = PointIndex::build(stations.iter().copied()).unwrap();
        for _ in 0..300 {
            let q = GeoPt::new(rng.random_range(1.15..1.5), rng.random_range(103.55..104.1));
            let hit = index.nearest(&q).unwrap();
            let brute = stations
                .iter()
                .map(|s| q.haversine_km(s))
                .fold(f64::INFINITY, f64::min);
            // Ranking is approximate; distances must agree to well under a metre.
            assert!(close(hit.distance, brute, 1e-4), "{} vs {brute}", hit.distance);
        }
    }
}
