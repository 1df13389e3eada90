//! Fluent builder for hand-assembled snapshots.
//!
//! # Usage
//!
//! ```rust
//! use sm_core::{BankId, BotId, Point, Tick};
//! use sm_world::{Bank, Bot, WorldViewBuilder};
//!
//! let view = WorldViewBuilder::new(20, 20)
//!     .tick(Tick(3))
//!     .scraps(50)
//!     .bot(Bot::new(BotId(1), Point::new(4, 4)).with_energy(80.0))
//!     .bank(Bank::new(BankId(1), Point::new(0, 0)).owned())
//!     .build();
//!
//! assert_eq!(view.bot_count(), 1);
//! assert!(view.bank(BankId(1)).is_some());
//! ```

use sm_core::{Point, Tick};

use crate::{Algae, Bank, Bot, EnemyBot, EnergyPad, PermanentEntities, Scrap, VisibleEntities, WorldView};

/// Fluent builder for [`WorldView`].
///
/// Defaults: tick 0, no scrap, `max_bots` 50, nothing on the map.
pub struct WorldViewBuilder {
    view: WorldView,
}

impl WorldViewBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            view: WorldView {
                tick:               Tick::ZERO,
                scraps:             0,
                algae:              0,
                bot_id_seed:        0,
                bot_count:          None,
                max_bots:           50,
                width,
                height,
                bots:               Default::default(),
                visible_entities:   VisibleEntities::default(),
                permanent_entities: PermanentEntities::default(),
            },
        }
    }

    pub fn tick(mut self, tick: Tick) -> Self {
        self.view.tick = tick;
        self
    }

    pub fn scraps(mut self, scraps: u32) -> Self {
        self.view.scraps = scraps;
        self
    }

    pub fn max_bots(mut self, max_bots: u32) -> Self {
        self.view.max_bots = max_bots;
        self
    }

    pub fn bot_id_seed(mut self, seed: u32) -> Self {
        self.view.bot_id_seed = seed;
        self
    }

    /// Add an own bot.  A later bot with the same id replaces the earlier one.
    pub fn bot(mut self, bot: Bot) -> Self {
        self.view.bots.insert(bot.id, bot);
        self
    }

    pub fn enemy(mut self, enemy: EnemyBot) -> Self {
        self.view.visible_entities.enemies.push(enemy);
        self
    }

    pub fn algae(mut self, algae: Algae) -> Self {
        self.view.visible_entities.algae.push(algae);
        self
    }

    pub fn scrap(mut self, location: Point, amount: u32) -> Self {
        self.view.visible_entities.scraps.push(Scrap { location, amount });
        self
    }

    pub fn bank(mut self, bank: Bank) -> Self {
        self.view.permanent_entities.banks.insert(bank.id, bank);
        self
    }

    pub fn pad(mut self, pad: EnergyPad) -> Self {
        self.view.permanent_entities.energy_pads.insert(pad.id, pad);
        self
    }

    pub fn wall(mut self, location: Point) -> Self {
        self.view.permanent_entities.walls.push(location);
        self
    }

    pub fn build(self) -> WorldView {
        self.view
    }
}
