// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone lookup.
//!
//! Bulk-build a bounding-box index over planning zones drawn as Kurbo shapes,
//! then ask which zone each site falls in.
//!
//! Run:
//! - `cargo run -p vicinity_demos --example zone_lookup`

use kurbo::{Circle, Rect, Shape as _};
use vicinity_geom::{Pt, Region, bound_to_rect};
use vicinity_index::BoundingBoxIndex;

fn main() {
    let zones = BoundingBoxIndex::build([
        (Region::new(Rect::new(0.0, 0.0, 40.0, 30.0).to_path(0.1)), "downtown"),
        (Region::new(Circle::new((70.0, 20.0), 15.0).to_path(0.1)), "park"),
        (
            Region::polygon([(0.0, 40.0), (50.0, 40.0), (50.0, 60.0), (20.0, 80.0), (0.0, 60.0)])
                .unwrap(),
            "harbour",
        ),
    ])
    .unwrap();
    println!("zones cover {:?}", bound_to_rect(zones.big_bound()));

    for site in [Pt::new(10.0, 10.0), Pt::new(75.0, 25.0), Pt::new(30.0, 65.0), Pt::new(83.0, 33.0)] {
        match zones.find_shape(&site) {
            Some(zone) => println!("{:?} is in {zone}", site.0),
            None => println!("{:?} is outside every zone", site.0),
        }
    }

    // Boxes visited on the way to an answer, for debugging pruning.
    let visited = zones.find_bounds_containing(&Pt::new(83.0, 33.0));
    println!("visited {} node boxes for a corner miss", visited.len());
    assert_eq!(zones.find_shape(&Pt::new(83.0, 33.0)), None);
}
