//! The flash scout: speed-rushes onto algae so its poison status gets
//! revealed.  Never harvests.

use sm_behavior::{Action, AgentContext, BehaviorResult, BotPolicy};
use sm_core::{Ability, Direction};
use sm_spatial::SpeedStep;

use crate::charge::{ChargeState, ChargeStep, PadCountdown, charge_step, pick_pad};

pub const ENERGY_THRESHOLD: f32 = 10.0;
pub const SEARCH_RADIUS: u32 = 10;

#[derive(Debug, Default)]
pub struct FlashScout {
    state:     ChargeState,
    countdown: PadCountdown,
}

impl FlashScout {
    pub const NAME: &'static str = "flash_scout";
    pub const ABILITIES: &'static [Ability] = &[Ability::Scout, Ability::Speed];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChargeState {
        self.state
    }
}

fn speed_move(step: SpeedStep) -> Option<Action> {
    step.direction.map(|direction| Action::MoveSpeed { direction, step: step.step })
}

impl BotPolicy for FlashScout {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn act(&mut self, ctx: &AgentContext<'_>) -> BehaviorResult<Option<Action>> {
        if let ChargeState::Charging(pad) = self.state {
            return Ok(match charge_step(ctx, pad, 0, &mut self.countdown) {
                ChargeStep::Done => {
                    self.state = ChargeState::Active;
                    None
                }
                ChargeStep::Hold => None,
                ChargeStep::Toward(p) => speed_move(ctx.move_speed_target(p)?),
            });
        }

        if ctx.energy() < ENERGY_THRESHOLD {
            if let Some((pad, countdown)) = pick_pad(ctx) {
                self.state = ChargeState::Charging(pad);
                self.countdown = countdown;
                return Ok(None);
            }
        }

        let here = ctx.location();
        let nearest = ctx
            .sense_algae_in_radius(here, SEARCH_RADIUS)
            .into_iter()
            .map(|a| a.location)
            .filter(|&p| p != here)
            .min_by_key(|&p| p.manhattan(here));
        if let Some(algae) = nearest {
            if let Some(action) = speed_move(ctx.move_speed_target(algae)?) {
                return Ok(Some(action));
            }
        }

        Ok(Some(Action::Move(Direction::North)))
    }
}
