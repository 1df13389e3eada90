//! TOML-scripted spawn policy.
//!
//! # Script format
//!
//! ```toml
//! [[rule]]
//! strategy        = "forager"
//! location        = 3              # home-row column, or { x = 3, y = 4 }
//! extra_abilities = ["SHIELD"]     # optional
//! count           = 2              # living bots to maintain, default 1
//! from_tick       = 0              # first tick the rule applies, default 0
//! ```
//!
//! Each rule keeps `count` living bots of its own.  A bot spawned on tick `t`
//! counts as living on `t + 1` even before the snapshot shows it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use sm_core::{Ability, BotId, Point, Tick};
use sm_world::WorldView;

use crate::{EngineResult, SpawnPolicy, SpawnPolicyLoader, SpawnSpec};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum RawLocation {
    Column(i32),
    Cell(Point),
}

impl Default for RawLocation {
    fn default() -> Self {
        RawLocation::Column(0)
    }
}

impl RawLocation {
    fn point(self) -> Point {
        match self {
            RawLocation::Column(x) => Point::new(x, 0),
            RawLocation::Cell(p) => p,
        }
    }
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
struct Rule {
    strategy: String,
    #[serde(default)]
    location: RawLocation,
    #[serde(default)]
    extra_abilities: Vec<Ability>,
    #[serde(default = "one")]
    count: u32,
    #[serde(default)]
    from_tick: Tick,
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default, rename = "rule")]
    rules: Vec<Rule>,
}

/// Spawn policy driven by a list of maintain-N rules.
#[derive(Debug)]
pub struct ScriptedSpawnPolicy {
    rules:     Vec<Rule>,
    /// Bots spawned per rule, with their spawn tick.
    tracked:   Vec<Vec<(BotId, Tick)>>,
    /// Rule index of every spec in the latest plan.
    last_plan: Vec<usize>,
}

impl ScriptedSpawnPolicy {
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        let file: ScriptFile = toml::from_str(text)?;
        let tracked = vec![Vec::new(); file.rules.len()];
        Ok(Self { rules: file.rules, tracked, last_plan: Vec::new() })
    }

    pub fn from_path(path: &Path) -> EngineResult<Self> {
        let policy = Self::from_toml_str(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), rules = policy.rule_count(), "spawn script loaded");
        Ok(policy)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl SpawnPolicy for ScriptedSpawnPolicy {
    fn plan(&mut self, view: &WorldView) -> EngineResult<Vec<SpawnSpec>> {
        self.last_plan.clear();
        let mut specs = Vec::new();

        for (index, rule) in self.rules.iter().enumerate() {
            let tracked = &mut self.tracked[index];
            tracked.retain(|&(id, at)| view.contains_bot(id) || view.tick.since(at) <= 1);

            if view.tick < rule.from_tick {
                continue;
            }
            let missing = rule.count.saturating_sub(tracked.len() as u32);
            for _ in 0..missing {
                specs.push(
                    SpawnSpec::new(rule.strategy.clone(), rule.location.point())
                        .with_extra(&rule.extra_abilities),
                );
                self.last_plan.push(index);
            }
        }
        Ok(specs)
    }

    fn on_spawned(&mut self, index: usize, id: BotId, tick: Tick) {
        if let Some(&rule) = self.last_plan.get(index) {
            self.tracked[rule].push((id, tick));
        }
    }
}

/// Loads a [`ScriptedSpawnPolicy`] from a file at bootstrap.
#[derive(Debug, Clone)]
pub struct ScriptLoader {
    path: PathBuf,
}

impl ScriptLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SpawnPolicyLoader for ScriptLoader {
    fn load(&self) -> EngineResult<Box<dyn SpawnPolicy>> {
        Ok(Box::new(ScriptedSpawnPolicy::from_path(&self.path)?))
    }
}
