// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vicinity_order --heading-base-level=0

//! Vicinity Order: an AVL ordered multiset and the priority queues built on it.
//!
//! - [`OrderedMultiset`]: sorted keys with duplicate counts, logarithmic insert and
//!   delete, and order statistics ([`rank`](OrderedMultiset::rank),
//!   [`select`](OrderedMultiset::select)).
//! - [`PriorityQueue`]: min-queue over values that order themselves.
//! - [`KeyedPriorityQueue`]: min-queue over values whose priority is computed by a
//!   key function and can change while queued.
//!
//! # Example
//!
//! ```rust
//! use vicinity_order::{OrderedMultiset, PriorityQueue};
//!
//! let mut set: OrderedMultiset<i32> = [5, 3, 8, 3, 1].into_iter().collect();
//! assert_eq!(set.rank(&3), 2);
//! assert_eq!(set.count(&3), 2);
//! set.delete(&3);
//! set.delete(&3);
//! assert_eq!(set.in_order(), [&1, &5, &8]);
//!
//! let mut queue: PriorityQueue<u32> = [30, 10, 20].into_iter().collect();
//! assert_eq!(queue.deq(), Some(10));
//! assert_eq!(queue.peek(), Some(&20));
//! ```
//!
//! ## Equal keys
//!
//! Keys that compare equal are one multiset entry with a count. The plain queue
//! therefore treats equal values as interchangeable. The keyed queue keeps every
//! value and releases values that share a key in the order they were queued.
//!
//! Queries take `&self` and never mutate; callers serialize writers themselves.

#![no_std]

extern crate alloc;

pub mod keyed;
pub mod multiset;
pub mod queue;

pub use keyed::KeyedPriorityQueue;
pub use multiset::OrderedMultiset;
pub use queue::PriorityQueue;
