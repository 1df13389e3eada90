//! `WorldView`: the immutable snapshot handed to the engine each tick.
//!
//! Own bots, banks and pads are keyed maps (`BTreeMap`), so iteration order is
//! ascending id.  On the wire those maps are JSON objects with decimal string
//! keys; serde_json converts them to the typed ids directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sm_core::{BankId, BotId, Bounds, PadId, Point, Tick};

use crate::{Algae, Bank, Bot, EnemyBot, EnergyPad, Scrap, WorldError, WorldResult};

/// Entities inside this player's field of view for the current tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleEntities {
    #[serde(default)]
    pub enemies: Vec<EnemyBot>,
    #[serde(default)]
    pub scraps: Vec<Scrap>,
    #[serde(default)]
    pub algae: Vec<Algae>,
}

/// Structures that never move.  Their dynamic fields (deposit timers, pad
/// cooldowns) still change between ticks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermanentEntities {
    #[serde(default)]
    pub banks: BTreeMap<BankId, Bank>,
    #[serde(default)]
    pub energy_pads: BTreeMap<PadId, EnergyPad>,
    #[serde(default)]
    pub walls: Vec<Point>,
}

/// Decoded world state for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldView {
    pub tick: Tick,

    /// Pooled scrap budget available for spawning.
    #[serde(default)]
    pub scraps: u32,
    /// Pooled algae already banked.
    #[serde(default)]
    pub algae: u32,

    /// Lowest id the engine will accept for a new bot.
    #[serde(default)]
    pub bot_id_seed: u32,
    #[serde(default)]
    pub bot_count: Option<u32>,
    pub max_bots: u32,

    pub width:  i32,
    pub height: i32,

    #[serde(default)]
    pub bots: BTreeMap<BotId, Bot>,
    #[serde(default)]
    pub visible_entities: VisibleEntities,
    #[serde(default)]
    pub permanent_entities: PermanentEntities,
}

impl WorldView {
    /// Decode one snapshot line and check its internal consistency.
    pub fn from_json(line: &str) -> WorldResult<Self> {
        let view: WorldView = serde_json::from_str(line)?;
        view.validate()?;
        Ok(view)
    }

    /// Reject snapshots whose bot map keys disagree with the bots' own ids or
    /// whose grid is empty.
    pub fn validate(&self) -> WorldResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(WorldError::InvalidBounds { width: self.width, height: self.height });
        }
        for (&key, bot) in &self.bots {
            if key != bot.id {
                return Err(WorldError::IdMismatch { key, reported: bot.id });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Number of living own bots, as reported by the engine or counted.
    pub fn bot_count(&self) -> u32 {
        self.bot_count.unwrap_or(self.bots.len() as u32)
    }

    // ── Own bots ──────────────────────────────────────────────────────────

    /// Own bots in ascending id order.
    pub fn own_bots(&self) -> impl Iterator<Item = &Bot> {
        self.bots.values()
    }

    pub fn bot(&self, id: BotId) -> Option<&Bot> {
        self.bots.get(&id)
    }

    pub fn contains_bot(&self, id: BotId) -> bool {
        self.bots.contains_key(&id)
    }

    /// Largest own-bot id in the snapshot.
    pub fn max_bot_id(&self) -> Option<BotId> {
        self.bots.keys().next_back().copied()
    }

    // ── Visible ───────────────────────────────────────────────────────────

    pub fn enemies(&self) -> &[EnemyBot] {
        &self.visible_entities.enemies
    }

    pub fn algae(&self) -> &[Algae] {
        &self.visible_entities.algae
    }

    pub fn scraps_visible(&self) -> &[Scrap] {
        &self.visible_entities.scraps
    }

    // ── Permanent ─────────────────────────────────────────────────────────

    pub fn banks(&self) -> impl Iterator<Item = &Bank> {
        self.permanent_entities.banks.values()
    }

    pub fn bank(&self, id: BankId) -> Option<&Bank> {
        self.permanent_entities.banks.get(&id)
    }

    pub fn energy_pads(&self) -> impl Iterator<Item = &EnergyPad> {
        self.permanent_entities.energy_pads.values()
    }

    pub fn pad(&self, id: PadId) -> Option<&EnergyPad> {
        self.permanent_entities.energy_pads.get(&id)
    }

    pub fn walls(&self) -> &[Point] {
        &self.permanent_entities.walls
    }
}
