// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest station.
//!
//! Index a handful of stations by latitude/longitude and find the closest one to
//! each of a few addresses, in kilometres.
//!
//! Run:
//! - `cargo run -p vicinity_demos --example nearest_station`

use vicinity_geom::GeoPt;
use vicinity_index::{Point, PointIndex};

fn main() {
    let stations = [
        ("Raffles Place", GeoPt::new(1.2840, 103.8515)),
        ("Dhoby Ghaut", GeoPt::new(1.2990, 103.8456)),
        ("Bishan", GeoPt::new(1.3510, 103.8485)),
        ("Jurong East", GeoPt::new(1.3331, 103.7422)),
        ("Tampines", GeoPt::new(1.3533, 103.9452)),
        ("Woodlands", GeoPt::new(1.4370, 103.7865)),
    ];
    let index = PointIndex::build(stations.iter().map(|(_, p)| *p)).unwrap();
    println!("indexed {} stations, height {}", index.len(), index.height());
    println!("coverage: {}", index.bound());

    let addresses = [
        ("office", GeoPt::new(1.2800, 103.8500)),
        ("school", GeoPt::new(1.3450, 103.7300)),
        ("mall", GeoPt::new(1.3520, 103.9400)),
    ];
    for (name, at) in addresses {
        let hit = index.nearest(&at).unwrap();
        let station = hit.point.unwrap();
        let label = stations
            .iter()
            .find(|(_, p)| p == station)
            .map(|(label, _)| *label)
            .unwrap();
        println!("{name}: nearest station {label} at {:.2} km", hit.distance);
        assert_eq!(hit.distance, at.distance(station).unwrap());
    }

    // The sentinel for an index with nothing in it.
    let empty: PointIndex<GeoPt> = PointIndex::new();
    let none = empty.nearest(&GeoPt::new(0.0, 0.0)).unwrap();
    assert!(none.point.is_none() && none.distance.is_infinite());
}
