//! Grid coordinates, cardinal directions, and map bounds.
//!
//! The engine's sign convention is fixed: `y` grows northward and `x` grows
//! eastward.
//!
//! ```text
//!            NORTH (0, +1)
//!                 ▲
//! WEST (-1, 0) ◄──┼──► EAST (+1, 0)
//!                 ▼
//!            SOUTH (0, -1)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

// ── Point ─────────────────────────────────────────────────────────────────────

/// An integer cell on the game grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell `n` steps away in direction `dir`.  No bounds check.
    #[inline]
    pub fn step(self, dir: Direction, n: i32) -> Point {
        let (dx, dy) = dir.delta();
        Point::new(self.x + dx * n, self.y + dy * n)
    }

    /// The four orthogonal neighbours in `Direction::ALL` order.
    pub fn neighbours(self) -> [Point; 4] {
        Direction::ALL.map(|d| self.step(d, 1))
    }

    /// Path-guide key form, `"x,y"`.
    pub fn key(self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = CoreError;

    /// Parse the path-guide key form `"x,y"` (whitespace tolerated).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| CoreError::InvalidPoint(s.to_owned()))?;
        let x = x.trim().parse().map_err(|_| CoreError::InvalidPoint(s.to_owned()))?;
        let y = y.trim().parse().map_err(|_| CoreError::InvalidPoint(s.to_owned()))?;
        Ok(Point { x, y })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.manhattan(b)
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal movement directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit `(dx, dy)` for one step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East  => (1, 0),
            Direction::South => (0, -1),
            Direction::West  => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East  => Direction::West,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
        }
    }

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East  => "EAST",
            Direction::South => "SOUTH",
            Direction::West  => "WEST",
        }
    }

    /// The direction that takes `from` onto `to` when they are orthogonally
    /// adjacent; `None` otherwise (including `from == to`).
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| from.step(d, 1) == to)
    }

    /// Primary cardinal heading from `from` toward `to`: the axis with the
    /// larger remaining delta wins, ties go to the x axis.
    pub fn toward(from: Point, to: Point) -> Option<Direction> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx == 0 && dy == 0 {
            return None;
        }
        Some(if dx.abs() >= dy.abs() {
            if dx > 0 { Direction::East } else { Direction::West }
        } else if dy > 0 {
            Direction::North
        } else {
            Direction::South
        })
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NORTH" => Ok(Direction::North),
            "EAST"  => Ok(Direction::East),
            "SOUTH" => Ok(Direction::South),
            "WEST"  => Ok(Direction::West),
            other   => Err(CoreError::UnknownDirection(other.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The playable rectangle `[0, width) × [0, height)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Bounds {
    pub width:  i32,
    pub height: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// `from` moved `n` cells along `dir`, or `None` if that leaves the grid.
    #[inline]
    pub fn step(self, from: Point, dir: Direction, n: i32) -> Option<Point> {
        let p = from.step(dir, n);
        self.contains(p).then_some(p)
    }

    /// Number of cells.
    pub fn area(self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}
