//! Pad seeking shared by every strategy that recharges.

use sm_behavior::AgentContext;
use sm_core::{PadId, Point};

/// Two-state machine for strategies whose only side trip is recharging.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ChargeState {
    #[default]
    Active,
    /// Heading for, or waiting at, this pad.
    Charging(PadId),
}

/// The last `ticks_left` seen on the pad being charged at.
///
/// A ready pad reports `0`, so zero alone means nothing.  Charging is over
/// only when a countdown that was running drops to zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) struct PadCountdown(u32);

impl PadCountdown {
    /// Record `ticks_left`; `true` when a running countdown just ran out.
    fn ran_out(&mut self, ticks_left: u32) -> bool {
        let was_running = self.0 > 0;
        self.0 = ticks_left;
        was_running && ticks_left == 0
    }
}

/// What a charging bot should do this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum ChargeStep {
    /// The pad vanished or its countdown ran out; resume normal duty.
    Done,
    /// Close enough; the engine resolves the recharge.
    Hold,
    /// Keep walking toward the pad.
    Toward(Point),
}

/// Next charging step toward `pad`, holding once within Manhattan
/// `hold_within` of it.
pub(crate) fn charge_step(
    ctx:         &AgentContext<'_>,
    pad:         PadId,
    hold_within: u32,
    countdown:   &mut PadCountdown,
) -> ChargeStep {
    let Some(pad) = ctx.energy_pad(pad) else {
        return ChargeStep::Done;
    };
    if countdown.ran_out(pad.ticks_left) {
        return ChargeStep::Done;
    }
    if ctx.location().manhattan(pad.location) <= hold_within {
        ChargeStep::Hold
    } else {
        ChargeStep::Toward(pad.location)
    }
}

/// The pad to latch onto when energy runs low, if any is visible, with its
/// countdown as of now.
pub(crate) fn pick_pad(ctx: &AgentContext<'_>) -> Option<(PadId, PadCountdown)> {
    ctx.nearest_energy_pad().map(|p| (p.id, PadCountdown(p.ticks_left)))
}
