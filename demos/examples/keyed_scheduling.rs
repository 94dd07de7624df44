// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed scheduling.
//!
//! Queue delivery jobs by their distance to a depot, re-key one when its drop-off
//! moves, and use the ordered multiset to report where a distance ranks.
//!
//! Run:
//! - `cargo run -p vicinity_demos --example keyed_scheduling`

use std::cell::RefCell;

use ordered_float::OrderedFloat;
use vicinity_geom::Pt;
use vicinity_index::Point;
use vicinity_order::{KeyedPriorityQueue, OrderedMultiset};

fn main() {
    let depot = Pt::new(0.0, 0.0);
    let drop_offs = RefCell::new(vec![
        Pt::new(3.0, 4.0),
        Pt::new(1.0, 1.0),
        Pt::new(6.0, 8.0),
        Pt::new(0.0, 2.0),
    ]);
    let distance_of = |job: &usize| {
        let at = drop_offs.borrow()[*job];
        OrderedFloat(depot.distance(&at).unwrap_or(f64::INFINITY))
    };

    let mut jobs = KeyedPriorityQueue::new(distance_of);
    for job in 0..drop_offs.borrow().len() {
        jobs.enq(job);
    }
    println!("next job: {:?}", jobs.peek());

    // Job 2's drop-off moves next door; its queue position must follow.
    drop_offs.borrow_mut()[2] = Pt::new(0.5, 0.0);
    jobs.update(2);

    let mut order = Vec::new();
    while let Some(job) = jobs.deq() {
        order.push(job);
    }
    println!("dispatch order: {order:?}");
    assert_eq!(order, [2, 1, 3, 0]);

    let distances: OrderedMultiset<OrderedFloat<f64>> =
        (0..4).map(|job| distance_of(&job)).collect();
    let trip = OrderedFloat(2.0);
    println!(
        "a {} km trip would rank {} of {}",
        trip.0,
        distances.rank(&trip),
        distances.len() + 1
    );
    println!("median distance: {:?}", distances.select(distances.len() / 2 + 1));
}
