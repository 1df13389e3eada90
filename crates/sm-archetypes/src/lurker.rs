//! The lurker: waits for a rival deposit and lockpicks the bank.

use tracing::debug;

use sm_behavior::{Action, AgentContext, BehaviorResult, BotPolicy};
use sm_core::{Ability, Direction, Point};

use crate::charge::{ChargeState, ChargeStep, PadCountdown, charge_step, pick_pad};

pub const ENERGY_THRESHOLD: f32 = 10.0;
/// Consecutive lockpick ticks before giving up on a bank.
pub const LOCKPICK_LIMIT: u32 = 20;

const WANDER_ORDER: [Direction; 4] =
    [Direction::North, Direction::East, Direction::West, Direction::South];

#[derive(Debug, Default)]
pub struct Lurker {
    state:          ChargeState,
    countdown:      PadCountdown,
    target:         Option<Point>,
    lockpick_ticks: u32,
}

impl Lurker {
    pub const NAME: &'static str = "lurker";
    pub const ABILITIES: &'static [Ability] = &[Ability::Lockpick];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChargeState {
        self.state
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    fn drop_target(&mut self) {
        self.target = None;
        self.lockpick_ticks = 0;
    }

    /// Keep the target only while a rival deposit is still running there.
    fn refresh_target(&mut self, ctx: &AgentContext<'_>) {
        if let Some(t) = self.target {
            let live = ctx
                .view()
                .banks()
                .any(|b| b.location == t && b.deposit_occurring && !b.is_bank_owner);
            if !live {
                self.drop_target();
            }
        }
        if self.target.is_none() {
            self.target = ctx
                .depositing_banks_sorted()
                .into_iter()
                .find(|b| !b.is_bank_owner)
                .map(|b| b.location);
        }
    }
}

impl BotPolicy for Lurker {
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
                debug!(bot = %ctx.id(), pad = %pad, "lurker charging");
                self.state = ChargeState::Charging(pad);
                self.countdown = countdown;
                self.lockpick_ticks = 0;
                return Ok(None);
            }
        }

        self.refresh_target(ctx);
        let Some(target) = self.target else {
            return Ok(WANDER_ORDER
                .into_iter()
                .find(|&d| !ctx.is_blocked_direction(d))
                .map(Action::Move));
        };

        if ctx.location().manhattan(target) == 1 {
            self.lockpick_ticks += 1;
            if self.lockpick_ticks >= LOCKPICK_LIMIT {
                debug!(bot = %ctx.id(), bank = %target, "lurker giving up on bank");
                self.drop_target();
                return Ok(None);
            }
            return Ok(Some(Action::Lockpick(target)));
        }

        Ok(ctx.move_target(target).map(Action::Move))
    }
}
