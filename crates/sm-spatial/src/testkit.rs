//! Guide tables for tests.

use sm_core::{Direction, Point};

use crate::{GuideTable, GuideTableBuilder};

/// Guide for an obstacle-free `width × height` grid.
///
/// Every ordered pair of distinct cells gets up to two candidates: the axis
/// with the larger remaining delta first (ties go to x), then the other axis
/// when it still has ground to cover.  Distances are Manhattan, including
/// `0` for a cell to itself.
pub fn open_grid(width: i32, height: i32) -> GuideTable {
    let mut builder = GuideTableBuilder::new();
    let cells: Vec<Point> = (0..width)
        .flat_map(|x| (0..height).map(move |y| Point::new(x, y)))
        .collect();

    for &from in &cells {
        for &to in &cells {
            builder.distance(from, to, from.manhattan(to));
            if from == to {
                continue;
            }
            builder.hops(from, to, &candidates(from, to));
        }
    }
    builder.build()
}

fn candidates(from: Point, to: Point) -> Vec<Direction> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let horizontal = (dx != 0).then(|| if dx > 0 { Direction::East } else { Direction::West });
    let vertical = (dy != 0).then(|| if dy > 0 { Direction::North } else { Direction::South });

    let ordered = if dx.abs() >= dy.abs() {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };
    ordered.into_iter().flatten().collect()
}
