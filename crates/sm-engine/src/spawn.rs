//! Spawn planning interfaces.

use serde::{Deserialize, Serialize};

use sm_core::{Ability, BotId, Point, Tick};
use sm_world::WorldView;

use crate::EngineResult;

/// A request to spawn one bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnSpec {
    /// Registered strategy name.
    pub strategy: String,
    /// Abilities on top of the strategy's defaults.
    #[serde(default)]
    pub extra_abilities: Vec<Ability>,
    pub location: Point,
}

impl SpawnSpec {
    pub fn new(strategy: impl Into<String>, location: Point) -> Self {
        Self { strategy: strategy.into(), extra_abilities: Vec::new(), location }
    }

    /// Spawn on the home row: column `x`, row 0.
    pub fn at_column(strategy: impl Into<String>, x: i32) -> Self {
        Self::new(strategy, Point::new(x, 0))
    }

    pub fn with_extra(mut self, abilities: &[Ability]) -> Self {
        self.extra_abilities.extend_from_slice(abilities);
        self
    }
}

/// Decides, every tick, which bots to spawn.
pub trait SpawnPolicy: Send {
    /// Spawn requests for this tick, in priority order.
    fn plan(&mut self, view: &WorldView) -> EngineResult<Vec<SpawnSpec>>;

    /// The spec at `index` of the latest [`plan`](Self::plan) was spawned as
    /// `id`.  Specs skipped by the affordability check are not reported.
    fn on_spawned(&mut self, _index: usize, _id: BotId, _tick: Tick) {}
}

/// Resolves the spawn policy.  Called exactly once per engine, on its first
/// tick.
pub trait SpawnPolicyLoader: Send {
    fn load(&self) -> EngineResult<Box<dyn SpawnPolicy>>;
}

impl<F> SpawnPolicyLoader for F
where
    F: Fn() -> EngineResult<Box<dyn SpawnPolicy>> + Send,
{
    fn load(&self) -> EngineResult<Box<dyn SpawnPolicy>> {
        self()
    }
}
