//! The `BotPolicy` trait, the extension point for strategies.

use crate::{Action, AgentContext, BehaviorResult};

/// Per-bot decision logic with private memory across ticks.
///
/// The engine creates one instance per spawned bot and calls
/// [`act`](Self::act) once per tick while the bot lives.  State such as
/// "travelling to bank 3" lives in the implementing struct.
///
/// # Failure
///
/// An `Err` (or a panic) affects only this bot for this tick: the engine
/// logs it and emits no action.  The instance is kept with whatever state it
/// had reached.
///
/// # Example
///
/// ```rust,ignore
/// struct NorthBound;
///
/// impl BotPolicy for NorthBound {
///     fn name(&self) -> &'static str { "north" }
///
///     fn act(&mut self, ctx: &AgentContext<'_>) -> BehaviorResult<Option<Action>> {
///         Ok(ctx.can_move(Direction::North).then_some(Action::Move(Direction::North)))
///     }
/// }
/// ```
pub trait BotPolicy: Send {
    /// Strategy name used in logs.
    fn name(&self) -> &'static str;

    /// Decide this tick's action.  `Ok(None)` means "do nothing".
    fn act(&mut self, ctx: &AgentContext<'_>) -> BehaviorResult<Option<Action>>;

    /// Whether other own bots count as obstacles for this bot right now.
    ///
    /// Queried before each tick's context is built, so a policy may switch it
    /// with its own state.  Default: `true`.
    fn avoid_own_bots(&self) -> bool {
        true
    }
}
