//! The scout: walks onto unclassified algae, wanders at random otherwise.

use sm_behavior::{Action, AgentContext, BehaviorResult, BotPolicy};
use sm_core::{Ability, BotRng, Direction};

#[derive(Debug)]
pub struct Scout {
    rng: BotRng,
}

impl Scout {
    pub const NAME: &'static str = "scout";
    pub const ABILITIES: &'static [Ability] = &[Ability::Scout, Ability::SelfDestruct];

    /// `rng` drives wandering; equal seeds give equal walks.
    pub fn new(rng: BotRng) -> Self {
        Self { rng }
    }
}

impl BotPolicy for Scout {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn act(&mut self, ctx: &AgentContext<'_>) -> BehaviorResult<Option<Action>> {
        let here = ctx.location();
        let step = ctx
            .sense_unknown_algae(here)
            .into_iter()
            .filter(|&(d, _)| d > 0)
            .find_map(|(_, a)| ctx.move_target(a.location));
        if let Some(dir) = step {
            return Ok(Some(Action::Move(dir)));
        }

        let open: Vec<Direction> =
            Direction::ALL.into_iter().filter(|&d| !ctx.is_blocked_direction(d)).collect();
        Ok(self.rng.choose(&open).copied().map(Action::Move))
    }
}
