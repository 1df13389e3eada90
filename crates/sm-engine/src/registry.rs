//! Name-keyed strategy registry.
//!
//! Spawn specs refer to strategies by name.  Each entry carries the
//! strategy's default abilities and a factory producing a fresh policy
//! instance for every spawned bot.

use std::collections::BTreeMap;

use sm_behavior::BotPolicy;
use sm_core::{Ability, BotRng};

/// Builds a new policy for one bot.  The bot's deterministic RNG is handed
/// over so stochastic strategies stay reproducible.
pub type PolicyFactory = Box<dyn Fn(BotRng) -> Box<dyn BotPolicy> + Send + Sync>;

struct StrategyEntry {
    abilities: Vec<Ability>,
    factory:   PolicyFactory,
}

/// Registered strategies, iterated in name order.
#[derive(Default)]
pub struct StrategyRegistry {
    entries: BTreeMap<String, StrategyEntry>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`.  Re-registering a name replaces the earlier entry.
    pub fn register<F>(&mut self, name: &str, abilities: &[Ability], factory: F) -> &mut Self
    where
        F: Fn(BotRng) -> Box<dyn BotPolicy> + Send + Sync + 'static,
    {
        self.entries.insert(
            name.to_owned(),
            StrategyEntry {
                abilities: sm_core::merge_abilities(abilities, &[]),
                factory:   Box::new(factory),
            },
        );
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Default abilities of `name`.
    pub fn abilities(&self, name: &str) -> Option<&[Ability]> {
        self.entries.get(name).map(|e| e.abilities.as_slice())
    }

    /// A fresh policy for `name`.
    pub fn instantiate(&self, name: &str, rng: BotRng) -> Option<Box<dyn BotPolicy>> {
        self.entries.get(name).map(|e| (e.factory)(rng))
    }
}
