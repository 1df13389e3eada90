//! Per-tick index of blocked cells.

use rustc_hash::{FxHashMap, FxHashSet};

use sm_core::{BotId, Point};
use sm_world::WorldView;

/// Cells occupied by walls, visible enemies, and own bots.
///
/// Walls and enemies always block.  Own bots block only when the asking
/// policy opts in, and never block the bot standing on its own cell.
#[derive(Debug, Default)]
pub struct Obstacles {
    hard: FxHashSet<Point>,
    own:  FxHashMap<Point, Vec<BotId>>,
}

impl Obstacles {
    pub fn from_view(view: &WorldView) -> Self {
        let mut hard = FxHashSet::default();
        hard.extend(view.walls().iter().copied());
        hard.extend(view.enemies().iter().map(|e| e.location));

        let mut own: FxHashMap<Point, Vec<BotId>> = FxHashMap::default();
        for bot in view.own_bots() {
            own.entry(bot.location).or_default().push(bot.id);
        }
        Self { hard, own }
    }

    /// Wall or enemy at `p`.
    #[inline]
    pub fn is_hard(&self, p: Point) -> bool {
        self.hard.contains(&p)
    }

    /// An own bot other than `asker` stands at `p`.
    #[inline]
    pub fn has_other_own(&self, p: Point, asker: BotId) -> bool {
        self.own
            .get(&p)
            .is_some_and(|ids| ids.iter().any(|&id| id != asker))
    }

    /// Combined predicate.  Bounds are the navigator's concern.
    pub fn blocks(&self, p: Point, asker: BotId, avoid_own_bots: bool) -> bool {
        self.is_hard(p) || (avoid_own_bots && self.has_other_own(p, asker))
    }
}
