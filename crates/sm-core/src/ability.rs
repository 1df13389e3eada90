//! Bot abilities and their static resource costs.
//!
//! Costs are a fixed lookup keyed by ability.  Every bot pays the scrap cost
//! once at spawn time; the traversal energy is charged per move and the
//! action energy per use of the ability.
//!
//! | Ability         | scrap | traversal | action |
//! |-----------------|-------|-----------|--------|
//! | `HARVEST`       | 10    | 0         | 1      |
//! | `SCOUT`         | 10    | 1.5       | 0      |
//! | `SELF_DESTRUCT` | 5     | 0.5       | 0      |
//! | `SPEED`         | 10    | 1         | 0      |
//! | `SHIELD`        | 5     | 0.25      | 0      |
//! | `POISON`        | 5     | 0.5       | 2      |
//! | `LOCKPICK`      | 10    | 1.5       | 0      |
//! | `DEPOSIT`       | 0     | 0         | 1      |
//! | `MOVE`          | 0     | 0         | 0      |
//!
//! `SPEED` together with `SELF_DESTRUCT` earns a flat scrap discount.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Scrap refunded when `SPEED` and `SELF_DESTRUCT` are equipped together.
pub const SPEED_SELF_DESTRUCT_DISCOUNT: u32 = 5;

/// A capability granted to a bot at spawn time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    Harvest,
    Scout,
    #[serde(alias = "SELFDESTRUCT")]
    SelfDestruct,
    #[serde(alias = "SPEEDBOOST", alias = "SPEED_BOOST")]
    Speed,
    Shield,
    Lockpick,
    Poison,
    Deposit,
    Move,
}

impl Ability {
    pub const ALL: [Ability; 9] = [
        Ability::Harvest,
        Ability::Scout,
        Ability::SelfDestruct,
        Ability::Speed,
        Ability::Shield,
        Ability::Lockpick,
        Ability::Poison,
        Ability::Deposit,
        Ability::Move,
    ];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Ability::Harvest      => "HARVEST",
            Ability::Scout        => "SCOUT",
            Ability::SelfDestruct => "SELF_DESTRUCT",
            Ability::Speed        => "SPEED",
            Ability::Shield       => "SHIELD",
            Ability::Lockpick     => "LOCKPICK",
            Ability::Poison       => "POISON",
            Ability::Deposit      => "DEPOSIT",
            Ability::Move         => "MOVE",
        }
    }

    /// Scrap paid once when a bot carrying this ability is spawned.
    pub fn scrap_cost(self) -> u32 {
        match self {
            Ability::Harvest | Ability::Scout | Ability::Speed | Ability::Lockpick => 10,
            Ability::SelfDestruct | Ability::Shield | Ability::Poison => 5,
            Ability::Deposit | Ability::Move => 0,
        }
    }

    /// Extra energy charged per cell moved while carrying this ability.
    pub fn traversal_energy(self) -> f32 {
        match self {
            Ability::Scout | Ability::Lockpick => 1.5,
            Ability::Speed => 1.0,
            Ability::SelfDestruct | Ability::Poison => 0.5,
            Ability::Shield => 0.25,
            Ability::Harvest | Ability::Deposit | Ability::Move => 0.0,
        }
    }

    /// Energy charged each time the ability is used as an action.
    pub fn action_energy(self) -> f32 {
        match self {
            Ability::Harvest | Ability::Deposit => 1.0,
            Ability::Poison => 2.0,
            _ => 0.0,
        }
    }
}

impl FromStr for Ability {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "HARVEST" => Ok(Ability::Harvest),
            "SCOUT" => Ok(Ability::Scout),
            "SELF_DESTRUCT" | "SELFDESTRUCT" => Ok(Ability::SelfDestruct),
            "SPEED" | "SPEEDBOOST" | "SPEED_BOOST" => Ok(Ability::Speed),
            "SHIELD" => Ok(Ability::Shield),
            "LOCKPICK" => Ok(Ability::Lockpick),
            "POISON" => Ok(Ability::Poison),
            "DEPOSIT" => Ok(Ability::Deposit),
            "MOVE" => Ok(Ability::Move),
            other => Err(CoreError::UnknownAbility(other.to_owned())),
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AbilityCost ───────────────────────────────────────────────────────────────

/// Total resource cost of an ability set.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct AbilityCost {
    /// Scrap drawn from the pooled budget at spawn.
    pub scrap: u32,
    /// Per-cell traversal energy of a bot carrying the set.
    pub energy: f32,
}

impl AbilityCost {
    /// Cost of `abilities`, treated as a set: duplicates are counted once and
    /// order is irrelevant.  The `SPEED` + `SELF_DESTRUCT` discount is applied
    /// at most once.
    pub fn of(abilities: &[Ability]) -> Self {
        let unique = merge_abilities(abilities, &[]);

        let mut cost = AbilityCost::default();
        for ability in &unique {
            cost.scrap += ability.scrap_cost();
            cost.energy += ability.traversal_energy();
        }

        if unique.contains(&Ability::Speed) && unique.contains(&Ability::SelfDestruct) {
            cost.scrap = cost.scrap.saturating_sub(SPEED_SELF_DESTRUCT_DISCOUNT);
        }
        cost
    }
}

/// `base ∪ extra` with duplicates removed and first-seen order kept.
pub fn merge_abilities(base: &[Ability], extra: &[Ability]) -> Vec<Ability> {
    let mut out: Vec<Ability> = Vec::with_capacity(base.len() + extra.len());
    for &ability in base.iter().chain(extra) {
        if !out.contains(&ability) {
            out.push(ability);
        }
    }
    out
}
