//! `sm-archetypes` — the built-in bot strategies.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`charge`]      | `ChargeState`, shared pad-seeking step                       |
//! | [`forager`]     | `Forager` — harvest, deposit, recharge                       |
//! | [`lurker`]      | `Lurker` — lockpicks rival banks mid-deposit                 |
//! | [`saboteur`]    | `Saboteur` — hunts enemies and self-destructs next to them   |
//! | [`flash_scout`] | `FlashScout` — speed-rushes algae to classify it             |
//! | [`scout`]       | `Scout` — walks to unknown algae, wanders otherwise          |
//!
//! Every strategy is a [`BotPolicy`][sm_behavior::BotPolicy] with private
//! state.  [`register_builtins`] adds all of them to a
//! [`StrategyRegistry`] under their wire names:
//!
//! | Name          | Default abilities          |
//! |---------------|----------------------------|
//! | `forager`     | `HARVEST`, `DEPOSIT`       |
//! | `lurker`      | `LOCKPICK`                 |
//! | `saboteur`    | `SELF_DESTRUCT`            |
//! | `flash_scout` | `SCOUT`, `SPEED`           |
//! | `scout`       | `SCOUT`, `SELF_DESTRUCT`   |

pub mod charge;
pub mod flash_scout;
pub mod forager;
pub mod lurker;
pub mod saboteur;
pub mod scout;


pub use charge::ChargeState;
pub use flash_scout::FlashScout;
pub use forager::{Forager, ForagerState};
pub use lurker::Lurker;
pub use saboteur::Saboteur;
pub use scout::Scout;

use sm_engine::StrategyRegistry;

/// Register every built-in strategy.  Existing entries with the same names
/// are replaced.
pub fn register_builtins(registry: &mut StrategyRegistry) -> &mut StrategyRegistry {
    registry
        .register(Forager::NAME, Forager::ABILITIES, |_| Box::new(Forager::new()))
        .register(Lurker::NAME, Lurker::ABILITIES, |_| Box::new(Lurker::new()))
        .register(Saboteur::NAME, Saboteur::ABILITIES, |_| Box::new(Saboteur::new()))
        .register(FlashScout::NAME, FlashScout::ABILITIES, |_| Box::new(FlashScout::new()))
        .register(Scout::NAME, Scout::ABILITIES, |rng| Box::new(Scout::new(rng)))
}
