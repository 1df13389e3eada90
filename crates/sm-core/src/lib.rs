//! `sm-core` — foundational types for the seamaster bot client.
//!
//! This crate is a dependency of every other `sm-*` crate.  It has no `sm-*`
//! dependencies and only small external ones (`rand`, `serde`, `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `BotId`, `BankId`, `PadId`, `IdAllocator`             |
//! | [`geo`]         | `Point`, `Direction`, `Bounds`, Manhattan distance    |
//! | [`time`]        | `Tick`                                                |
//! | [`ability`]     | `Ability`, `AbilityCost`, the static cost table       |
//! | [`rng`]         | `BotRng` (per-bot deterministic RNG)                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod ability;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ability::{Ability, AbilityCost, merge_abilities};
pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, Direction, Point, manhattan};
pub use ids::{BankId, BotId, IdAllocator, PadId};
pub use rng::BotRng;
pub use time::Tick;
