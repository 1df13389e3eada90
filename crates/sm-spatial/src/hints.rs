//! The lookup interface the navigator is generic over.
//!
//! # Pluggability
//!
//! Behaviour code only ever reaches path data through [`PathHints`], so the
//! asset format, its storage, or a live search can be swapped without
//! touching the policies.

use std::sync::Arc;

use sm_core::{Direction, Point};

/// Precomputed shortest-path hints between grid cells.
///
/// Implementations must be `Send + Sync` so one table can be shared by every
/// bot of every engine in the process.
pub trait PathHints: Send + Sync {
    /// Candidate first-step directions from `from` toward `to`, best first.
    /// `None` when the pair has no entry.
    fn hops(&self, from: Point, to: Point) -> Option<&[Direction]>;

    /// Shortest-path length from `from` to `to`, if known.
    fn distance(&self, from: Point, to: Point) -> Option<u32>;
}

impl<T: PathHints + ?Sized> PathHints for &T {
    fn hops(&self, from: Point, to: Point) -> Option<&[Direction]> {
        (**self).hops(from, to)
    }

    fn distance(&self, from: Point, to: Point) -> Option<u32> {
        (**self).distance(from, to)
    }
}

impl<T: PathHints + ?Sized> PathHints for Arc<T> {
    fn hops(&self, from: Point, to: Point) -> Option<&[Direction]> {
        (**self).hops(from, to)
    }

    fn distance(&self, from: Point, to: Point) -> Option<u32> {
        (**self).distance(from, to)
    }
}
