//! `Navigator`: filters guide candidates against live obstacles.
//!
//! The obstacle predicate is supplied per call because blocking depends on
//! the current snapshot and on the asking bot.  The navigator also enforces
//! grid bounds itself, so no result ever leaves the map regardless of the
//! predicate.

use sm_core::{Bounds, Direction, Point};

use crate::PathHints;

// ── SpeedStep ─────────────────────────────────────────────────────────────────

/// Outcome of a two-cell speed move query.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SpeedStep {
    pub direction: Option<Direction>,
    /// Cells to move: 2, 1, or 0 when stopped.
    pub step: u8,
}

impl SpeedStep {
    /// No legal move.
    pub const STOP: SpeedStep = SpeedStep { direction: None, step: 0 };

    #[inline]
    pub fn new(direction: Direction, step: u8) -> Self {
        Self { direction: Some(direction), step }
    }

    #[inline]
    pub fn is_stop(self) -> bool {
        self.direction.is_none()
    }
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// Grid navigator over a [`PathHints`] source.
#[derive(Debug, Clone)]
pub struct Navigator<H> {
    hints:  H,
    bounds: Bounds,
}

impl<H: PathHints> Navigator<H> {
    pub fn new(hints: H, bounds: Bounds) -> Self {
        Self { hints, bounds }
    }

    #[inline]
    pub fn hints(&self) -> &H {
        &self.hints
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Guide distance between two cells, if the table knows it.
    #[inline]
    pub fn distance(&self, from: Point, to: Point) -> Option<u32> {
        self.hints.distance(from, to)
    }

    /// First guide candidate whose neighbouring cell is in bounds and not
    /// blocked.  `None` if the pair has no entry or every candidate is
    /// blocked.
    pub fn next_step<F>(&self, from: Point, to: Point, is_blocked: F) -> Option<Direction>
    where
        F: Fn(Point) -> bool,
    {
        let candidates = self.hints.hops(from, to)?;
        candidates
            .iter()
            .copied()
            .find(|&dir| self.open(from, dir, 1, &is_blocked))
    }

    /// Speed-move variant of [`next_step`](Self::next_step).
    ///
    /// Candidates are tried in guide order.  The first one whose two-cell
    /// target is open wins with `step = 2`.  Otherwise the first candidate
    /// whose one-cell target was open is returned with `step = 1`, and
    /// [`SpeedStep::STOP`] if none was.
    pub fn next_speed_step<F>(&self, from: Point, to: Point, is_blocked: F) -> SpeedStep
    where
        F: Fn(Point) -> bool,
    {
        let Some(candidates) = self.hints.hops(from, to) else {
            return SpeedStep::STOP;
        };

        let mut fallback: Option<Direction> = None;
        for &dir in candidates {
            if !self.open(from, dir, 1, &is_blocked) {
                continue;
            }
            fallback.get_or_insert(dir);
            if self.open(from, dir, 2, &is_blocked) {
                return SpeedStep::new(dir, 2);
            }
        }

        fallback.map_or(SpeedStep::STOP, |dir| SpeedStep::new(dir, 1))
    }

    #[inline]
    fn open<F>(&self, from: Point, dir: Direction, n: i32, is_blocked: &F) -> bool
    where
        F: Fn(Point) -> bool,
    {
        self.bounds.step(from, dir, n).is_some_and(|p| !is_blocked(p))
    }
}
