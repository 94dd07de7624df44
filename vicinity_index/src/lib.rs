// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vicinity_index --heading-base-level=0

//! Vicinity Index: balanced 2D indexes for "what is near here" and "what contains here".
//!
//! - [`PointIndex`]: a 2D k-d tree answering nearest-point queries.
//! - [`BoundingBoxIndex`]: a tree of shapes keyed on their bounding boxes, answering
//!   which stored shape contains a query point.
//! - [`quickselect`], [`median_with_left_right`] and friends: the in-place selection
//!   used to build both trees balanced in expected linear time per level.
//!
//! The indexes do no geometry of their own. Points are anything implementing
//! [`Point`] (coordinates plus a distance), shapes anything implementing [`Shape`]
//! (a [`Bound`] plus a containment test). Planar and geographic point kinds, and
//! Kurbo-backed regions, live in the `vicinity_geom` crate.
//!
//! # Example
//!
//! ```rust
//! use vicinity_index::{Bound, BoundingBoxIndex, Point, PointIndex, Result};
//!
//! #[derive(Debug, PartialEq)]
//! struct Xy(f64, f64);
//!
//! impl Point for Xy {
//!     fn x(&self) -> f64 { self.0 }
//!     fn y(&self) -> f64 { self.1 }
//!     fn distance(&self, other: &Self) -> Result<f64> {
//!         let (dx, dy) = (self.0 - other.0, self.1 - other.1);
//!         Ok((dx * dx + dy * dy).sqrt())
//!     }
//!     fn moved_to(&self, x: f64, y: f64) -> Self { Self(x, y) }
//! }
//!
//! // Nearest point.
//! let index = PointIndex::build([Xy(0.0, 0.0), Xy(1.0, 1.0), Xy(2.0, 2.0)])?;
//! let hit = index.nearest(&Xy(0.9, 1.2))?;
//! assert_eq!(hit.point, Some(&Xy(1.0, 1.0)));
//!
//! // Point in shape. A `Bound` is its own shape.
//! let zones = BoundingBoxIndex::build([
//!     (Bound::new(0.0, 0.0, 1.0, 1.0), "A"),
//!     (Bound::new(5.0, 5.0, 6.0, 6.0), "B"),
//! ])?;
//! assert_eq!(zones.find_shape(&Xy(0.5, 0.5)), Some(&"A"));
//! assert_eq!(zones.find_shape(&Xy(10.0, 10.0)), None);
//! # Ok::<(), vicinity_index::Error>(())
//! ```
//!
//! Building from nothing is an error; start from [`PointIndex::new`] or
//! [`BoundingBoxIndex::new`] to grow an index by insertion instead.
//!
//! ```rust
//! use vicinity_index::{Bound, BoundingBoxIndex, Error};
//!
//! let err = BoundingBoxIndex::<Bound, ()>::build([]).unwrap_err();
//! assert!(matches!(err, Error::EmptyInput { .. }));
//! ```
//!
//! ## Balance
//!
//! [`PointIndex::build`] and [`BoundingBoxIndex::build`] place the median of each
//! subtree at its root, so trees are balanced. [`PointIndex::insert`] and
//! [`BoundingBoxIndex::insert`] do not rebalance; a long run of sorted inserts
//! degrades to a chain. Every traversal is iterative, so deep trees cost time but
//! never stack.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs in coordinates or distances.

#![no_std]

extern crate alloc;

pub mod bounds_tree;
pub mod error;
pub mod kdtree;
pub mod point;
pub mod select;
pub mod shape;
pub mod types;

mod util;

pub use bounds_tree::BoundingBoxIndex;
pub use error::{Error, Result};
pub use kdtree::{Nearest, PointIndex};
pub use point::Point;
pub use select::{
    BuildOptions, PivotRule, Selector, median, median_with_left_right, partition, quickselect,
    quicksort,
};
pub use shape::Shape;
pub use types::{Axis, Bound, Edge};
