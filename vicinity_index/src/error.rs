// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by capability calls and bulk construction.

/// Errors reported by the index layer.
///
/// Absent results (an empty tree, a point outside every shape) are not errors;
/// they come back as [`None`] or as [`Nearest::none`](crate::Nearest::none).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two point kinds without a common distance were measured against each other.
    #[error("cannot measure distance from a {left} point to a {right} point")]
    OperandMismatch {
        /// Kind of the point the distance was measured from.
        left: &'static str,
        /// Kind of the point the distance was measured to.
        right: &'static str,
    },
    /// A bulk build was handed no items.
    #[error("cannot build {what} from empty input")]
    EmptyInput {
        /// The structure that was being built.
        what: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
