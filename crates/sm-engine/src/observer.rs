//! Engine observer trait for instrumentation.

use sm_core::{BotId, Tick};

use crate::TickResponse;

/// Callbacks invoked by [`Engine::tick`][crate::Engine::tick] at phase
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: failure counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Failures(usize);
///
/// impl EngineObserver for Failures {
///     fn on_bot_error(&mut self, _tick: Tick, _bot: BotId, _error: &str) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Before any phase runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A bot was spawned and bound to `strategy`.
    fn on_spawn(&mut self, _tick: Tick, _bot: BotId, _strategy: &str) {}

    /// A bot's policy returned an error or panicked; it emits nothing this
    /// tick.
    fn on_bot_error(&mut self, _tick: Tick, _bot: BotId, _error: &str) {}

    /// Cleanup dropped the binding of a bot that is no longer alive.
    fn on_bot_removed(&mut self, _tick: Tick, _bot: BotId) {}

    /// After the response has been assembled.
    fn on_tick_end(&mut self, _tick: Tick, _response: &TickResponse) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
