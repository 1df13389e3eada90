//! The forager: the economy bot.
//!
//! Harvests safe algae, hauls it to an own bank once it carries enough, and
//! walks to an energy pad when running low.
//!
//! ```text
//!            energy < 20, pad visible
//!   ACTIVE ───────────────────────────▶ CHARGING
//!     ▲  ◀── pad gone / countdown ran out / energy > 20
//!     │
//!     │  algae ≥ 5, own bank
//!     └─────────────────────────────▶ DEPOSITING
//!        ◀── algae 0 / bank gone / own deposit elapsed
//! ```

use tracing::debug;

use sm_behavior::{Action, AgentContext, BehaviorResult, BotPolicy};
use sm_core::{Ability, BankId, Direction, PadId};

use crate::charge::{ChargeStep, PadCountdown, charge_step, pick_pad};

pub const ENERGY_THRESHOLD: f32 = 20.0;
pub const ALGAE_THRESHOLD: u32 = 5;
/// Manhattan radius searched for algae.
pub const SEARCH_RADIUS: u32 = 10;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ForagerState {
    #[default]
    Active,
    Charging(PadId),
    Depositing(BankId),
}

#[derive(Debug, Default)]
pub struct Forager {
    state:     ForagerState,
    countdown: PadCountdown,
}

impl Forager {
    pub const NAME: &'static str = "forager";
    pub const ABILITIES: &'static [Ability] = &[Ability::Harvest, Ability::Deposit];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ForagerState {
        self.state
    }

    fn charge(&mut self, ctx: &AgentContext<'_>, pad: PadId) -> Option<Action> {
        if ctx.energy() > ENERGY_THRESHOLD {
            self.resume(ctx, "charged");
            return None;
        }
        match charge_step(ctx, pad, 1, &mut self.countdown) {
            ChargeStep::Done => {
                self.resume(ctx, "pad gone or finished");
                None
            }
            ChargeStep::Hold => None,
            ChargeStep::Toward(target) => ctx.move_target(target).map(Action::Move),
        }
    }

    fn deposit(&mut self, ctx: &AgentContext<'_>, bank: BankId) -> Option<Action> {
        let Some(bank) = ctx.bank(bank) else {
            self.resume(ctx, "bank gone");
            return None;
        };
        if ctx.algae_held() == 0 || bank.own_deposit_elapsed() {
            self.resume(ctx, "deposit complete");
            return None;
        }
        if bank.own_deposit_pending() {
            return None;
        }

        let here = ctx.location();
        match here.manhattan(bank.location) {
            0 => Some(Action::Deposit(None)),
            1 => Some(Action::Deposit(Direction::between(here, bank.location))),
            _ => ctx
                .bank_approach(bank)
                .and_then(|(_, cell)| ctx.move_target(cell))
                .map(Action::Move),
        }
    }

    fn forage(&self, ctx: &AgentContext<'_>) -> Option<Action> {
        let here = ctx.location();
        let (_, algae) = ctx
            .sense_safe_algae(here)
            .into_iter()
            .find(|(_, a)| a.location.manhattan(here) <= SEARCH_RADIUS)?;

        match here.manhattan(algae.location) {
            0 => Some(Action::Harvest(None)),
            1 => Some(Action::Harvest(Direction::between(here, algae.location))),
            _ => ctx.move_target(algae.location).map(Action::Move),
        }
    }

    fn resume(&mut self, ctx: &AgentContext<'_>, reason: &str) {
        debug!(bot = %ctx.id(), from = ?self.state, reason, "forager back to active");
        self.state = ForagerState::Active;
    }
}

impl BotPolicy for Forager {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn act(&mut self, ctx: &AgentContext<'_>) -> BehaviorResult<Option<Action>> {
        match self.state {
            ForagerState::Charging(pad) => return Ok(self.charge(ctx, pad)),
            ForagerState::Depositing(bank) => return Ok(self.deposit(ctx, bank)),
            ForagerState::Active => {}
        }

        if ctx.energy() < ENERGY_THRESHOLD {
            if let Some((pad, countdown)) = pick_pad(ctx) {
                debug!(bot = %ctx.id(), pad = %pad, energy = ctx.energy(), "forager charging");
                self.state = ForagerState::Charging(pad);
                self.countdown = countdown;
                return Ok(None);
            }
        }

        if ctx.algae_held() >= ALGAE_THRESHOLD {
            if let Some(bank) = ctx.my_banks_ranked().first() {
                debug!(bot = %ctx.id(), bank = %bank.id, held = ctx.algae_held(), "forager depositing");
                self.state = ForagerState::Depositing(bank.id);
                return Ok(None);
            }
        }

        Ok(self.forage(ctx))
    }

    /// Several foragers may queue on the same bank.
    fn avoid_own_bots(&self) -> bool {
        !matches!(self.state, ForagerState::Depositing(_))
    }
}
