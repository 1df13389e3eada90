//! `sm-world` — the decoded, read-only world view for one tick.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`entities`]  | `Bot`, `EnemyBot`, `Bank`, `EnergyPad`, `Algae`, `Scrap`        |
//! | [`view`]      | `WorldView`, `VisibleEntities`, `PermanentEntities`             |
//! | [`builder`]   | `WorldViewBuilder` (fluent construction for drivers and tests)  |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                                  |
//!
//! A `WorldView` is produced once per tick, either by decoding the engine's
//! JSON line ([`WorldView::from_json`]) or through [`WorldViewBuilder`], and
//! is only ever borrowed immutably afterwards.

pub mod builder;
pub mod entities;
pub mod error;
pub mod view;

#[cfg(test)]
mod tests;

pub use builder::WorldViewBuilder;
pub use entities::{Algae, Bank, Bot, EnemyBot, EnergyPad, PoisonKind, Scrap};
pub use error::{WorldError, WorldResult};
pub use view::{PermanentEntities, VisibleEntities, WorldView};
