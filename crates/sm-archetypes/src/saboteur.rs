//! The saboteur: chases enemies and blows itself up next to them.

use tracing::debug;

use sm_behavior::{Action, AgentContext, BehaviorResult, BotPolicy};
use sm_core::{Ability, Direction, Point};

use crate::charge::{ChargeState, ChargeStep, PadCountdown, charge_step, pick_pad};

pub const ENERGY_THRESHOLD: f32 = 10.0;
pub const BLAST_RADIUS: u32 = 1;
pub const HUNT_RADIUS: u32 = 10;

#[derive(Debug, Default)]
pub struct Saboteur {
    state:     ChargeState,
    countdown: PadCountdown,
    target:    Option<Point>,
}

impl Saboteur {
    pub const NAME: &'static str = "saboteur";
    pub const ABILITIES: &'static [Ability] = &[Ability::SelfDestruct];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChargeState {
        self.state
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// The closest ring (by Manhattan radius) holding an enemy decides.
    fn acquire(&self, ctx: &AgentContext<'_>) -> Option<Point> {
        let here = ctx.location();
        (BLAST_RADIUS + 1..=HUNT_RADIUS).find_map(|r| {
            ctx.sense_enemies_in_radius(here, r).first().map(|e| e.location)
        })
    }
}

impl BotPolicy for Saboteur {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn act(&mut self, ctx: &AgentContext<'_>) -> BehaviorResult<Option<Action>> {
        if let ChargeState::Charging(pad) = self.state {
            return Ok(match charge_step(ctx, pad, 1, &mut self.countdown) {
                ChargeStep::Done => {
                    self.state = ChargeState::Active;
                    None
                }
                ChargeStep::Hold => None,
                ChargeStep::Toward(p) => ctx.move_target(p).map(Action::Move),
            });
        }

        if ctx.energy() < ENERGY_THRESHOLD {
            if let Some((pad, countdown)) = pick_pad(ctx) {
                self.state = ChargeState::Charging(pad);
                self.countdown = countdown;
                self.target = None;
                return Ok(None);
            }
        }

        let here = ctx.location();
        if !ctx.sense_enemies_in_radius(here, BLAST_RADIUS).is_empty() {
            debug!(bot = %ctx.id(), at = %here, "saboteur detonating");
            return Ok(Some(Action::SelfDestruct));
        }

        if self.target.is_none() {
            self.target = self.acquire(ctx);
        }
        if let Some(target) = self.target {
            if let Some(dir) = ctx.move_target(target) {
                return Ok(Some(Action::Move(dir)));
            }
            self.target = None;
        }

        Ok(Some(Action::Move(Direction::North)))
    }
}
