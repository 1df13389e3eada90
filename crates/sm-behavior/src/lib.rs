//! `sm-behavior` — bot policy trait, agent context, and action types.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`action`]    | `Action` enum and its wire form `ActionPayload`                 |
//! | [`obstacles`] | `Obstacles` — per-tick index of blocked cells                   |
//! | [`context`]   | `AgentContext<'a>` — read-only per-bot view of the tick         |
//! | [`policy`]    | `BotPolicy` trait                                               |
//! | [`idle`]      | `IdlePolicy` — placeholder that never acts                      |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The engine builds one `Obstacles` index and one navigator per tick, then
//! one `AgentContext` per living bot.  Contexts only borrow; a policy's only
//! mutable state is its own struct, reached through `&mut self` in
//! [`BotPolicy::act`].

pub mod action;
pub mod context;
pub mod error;
pub mod idle;
pub mod obstacles;
pub mod policy;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionPayload};
pub use context::{AgentContext, DynNavigator};
pub use error::{BehaviorError, BehaviorResult};
pub use idle::IdlePolicy;
pub use obstacles::Obstacles;
pub use policy::BotPolicy;
