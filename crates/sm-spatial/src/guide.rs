//! `GuideTable`: immutable in-memory path-guide storage.
//!
//! Keyed by `(from, to)` cell pairs.  Candidate directions are kept in the
//! exact order they were inserted (the asset's order), since the navigator
//! treats the first legal candidate as the preferred one.

use rustc_hash::FxHashMap;

use sm_core::{Direction, Point};

use crate::PathHints;

/// Immutable path-guide table.  Build with [`GuideTableBuilder`] or load the
/// JSON asset through [`crate::load_guide`].
#[derive(Debug, Clone, Default)]
pub struct GuideTable {
    hops:      FxHashMap<(Point, Point), Box<[Direction]>>,
    distances: FxHashMap<(Point, Point), u32>,
}

impl GuideTable {
    /// Number of `(from, to)` pairs that carry direction hints.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Number of `(from, to)` pairs with a known distance.
    pub fn distance_count(&self) -> usize {
        self.distances.len()
    }
}

impl PathHints for GuideTable {
    #[inline]
    fn hops(&self, from: Point, to: Point) -> Option<&[Direction]> {
        self.hops.get(&(from, to)).map(|d| &**d)
    }

    #[inline]
    fn distance(&self, from: Point, to: Point) -> Option<u32> {
        self.distances.get(&(from, to)).copied()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Accumulates entries, then freezes them into a [`GuideTable`].
#[derive(Default)]
pub struct GuideTableBuilder {
    hops:      FxHashMap<(Point, Point), Box<[Direction]>>,
    distances: FxHashMap<(Point, Point), u32>,
}

impl GuideTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the candidate directions for `from → to`.  A second call for the
    /// same pair replaces the first.
    pub fn hops(&mut self, from: Point, to: Point, directions: &[Direction]) -> &mut Self {
        self.hops.insert((from, to), directions.into());
        self
    }

    /// Record the shortest-path length for `from → to`.
    pub fn distance(&mut self, from: Point, to: Point, distance: u32) -> &mut Self {
        self.distances.insert((from, to), distance);
        self
    }

    pub fn build(self) -> GuideTable {
        GuideTable { hops: self.hops, distances: self.distances }
    }
}
