//! Entities carried by a snapshot.
//!
//! Field names follow the engine's JSON contract.  Optional fields default so
//! that older engine builds that omit them still decode.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use sm_core::{Ability, BankId, BotId, PadId, Point};

// ── Bot ───────────────────────────────────────────────────────────────────────

/// A bot owned by this player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,

    #[serde(default)]
    pub owner_id: Option<u32>,

    pub location: Point,

    #[serde(default)]
    pub energy: f32,

    /// Scrap carried by this bot (not the pooled budget).
    #[serde(default)]
    pub scraps: u32,

    /// Equipped abilities, ordered and unique.  Names this build does not
    /// know are dropped on decode.
    #[serde(default, deserialize_with = "known_abilities")]
    pub abilities: Vec<Ability>,

    #[serde(default)]
    pub algae_held: u32,

    #[serde(default)]
    pub traversal_cost: Option<f32>,

    #[serde(default)]
    pub vision_radius: Option<f32>,

    #[serde(default)]
    pub status: Option<String>,
}

impl Bot {
    /// A bot at `location` with no energy, cargo, or abilities.
    pub fn new(id: BotId, location: Point) -> Self {
        Self {
            id,
            owner_id:       None,
            location,
            energy:         0.0,
            scraps:         0,
            abilities:      Vec::new(),
            algae_held:     0,
            traversal_cost: None,
            vision_radius:  None,
            status:         None,
        }
    }

    pub fn with_energy(mut self, energy: f32) -> Self {
        self.energy = energy;
        self
    }

    pub fn with_algae(mut self, algae_held: u32) -> Self {
        self.algae_held = algae_held;
        self
    }

    pub fn with_abilities(mut self, abilities: &[Ability]) -> Self {
        self.abilities = sm_core::merge_abilities(abilities, &[]);
        self
    }

    #[inline]
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }
}

/// A bot owned by another player and currently in view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBot {
    pub id: BotId,
    pub location: Point,
    #[serde(default)]
    pub scraps: u32,
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

impl EnemyBot {
    pub fn new(id: BotId, location: Point) -> Self {
        Self { id, location, scraps: 0, abilities: Vec::new() }
    }
}

// ── Static structures ─────────────────────────────────────────────────────────

/// A deposit point.  Deposits take several ticks and can be lockpicked by
/// rivals while in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: BankId,
    pub location: Point,

    #[serde(default, alias = "deposit_occuring")]
    pub deposit_occurring: bool,
    #[serde(default)]
    pub deposit_amount: u32,
    #[serde(default)]
    pub deposit_ticks_left: u32,

    /// This player owns the bank.
    #[serde(default)]
    pub is_bank_owner: bool,
    /// The deposit currently in progress is this player's.
    #[serde(default)]
    pub is_deposit_owner: bool,

    #[serde(default, alias = "lockpick_occuring")]
    pub lockpick_occurring: bool,
    #[serde(default)]
    pub lockpick_ticks_left: u32,
    #[serde(default, alias = "lockpick_botid")]
    pub lockpick_bot_id: Option<BotId>,
}

impl Bank {
    pub fn new(id: BankId, location: Point) -> Self {
        Self {
            id,
            location,
            deposit_occurring:   false,
            deposit_amount:      0,
            deposit_ticks_left:  0,
            is_bank_owner:       false,
            is_deposit_owner:    false,
            lockpick_occurring:  false,
            lockpick_ticks_left: 0,
            lockpick_bot_id:     None,
        }
    }

    pub fn owned(mut self) -> Self {
        self.is_bank_owner = true;
        self
    }

    /// `true` while one of this player's deposits is being processed here.
    pub fn own_deposit_pending(&self) -> bool {
        self.deposit_occurring && self.is_deposit_owner && self.deposit_ticks_left > 0
    }

    /// `true` once this player's deposit timer has run out.
    pub fn own_deposit_elapsed(&self) -> bool {
        self.deposit_occurring && self.is_deposit_owner && self.deposit_ticks_left == 0
    }
}

/// A recharge station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPad {
    pub id: PadId,
    pub location: Point,

    /// Accepts either a JSON bool or a 0/1 integer.
    #[serde(default = "default_available", deserialize_with = "bool_or_int")]
    pub available: bool,

    #[serde(default, alias = "ticksleft")]
    pub ticks_left: u32,
}

fn default_available() -> bool {
    true
}

impl EnergyPad {
    pub fn new(id: PadId, location: Point) -> Self {
        Self { id, location, available: true, ticks_left: 0 }
    }

    pub fn with_ticks_left(mut self, ticks_left: u32) -> Self {
        self.ticks_left = ticks_left;
        self.available = ticks_left == 0;
        self
    }
}

/// Poison classification of an algae patch as far as this player knows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PoisonKind {
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[serde(rename = "TRUE")]
    Poisonous,
    #[serde(rename = "FALSE")]
    Safe,
}

/// A harvestable algae patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Algae {
    pub location: Point,
    #[serde(default)]
    pub is_poison: PoisonKind,
}

impl Algae {
    pub fn new(location: Point, is_poison: PoisonKind) -> Self {
        Self { location, is_poison }
    }
}

/// Loose scrap lying on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scrap {
    pub location: Point,
    #[serde(default)]
    pub amount: u32,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bool_or_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

fn known_abilities<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Ability>, D::Error> {
    let names = Vec::<String>::deserialize(deserializer)?;
    Ok(names
        .into_iter()
        .filter_map(|name| match name.parse::<Ability>() {
            Ok(ability) => Some(ability),
            Err(e) => {
                warn!(error = %e, "skipping ability");
                None
            }
        })
        .collect())
}
