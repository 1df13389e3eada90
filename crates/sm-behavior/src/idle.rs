//! A policy that never acts.

use crate::{Action, AgentContext, BehaviorResult, BotPolicy};

/// A [`BotPolicy`] that always returns `Ok(None)`.
///
/// Useful as a placeholder in tests or for bots that only occupy space.
pub struct IdlePolicy;

impl BotPolicy for IdlePolicy {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn act(&mut self, _ctx: &AgentContext<'_>) -> BehaviorResult<Option<Action>> {
        Ok(None)
    }
}
