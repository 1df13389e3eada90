//! The per-tick response sent back to the game engine.

use std::collections::BTreeMap;

use serde::Serialize;

use sm_behavior::Action;
use sm_core::{Ability, BotId, Point};

use crate::EngineResult;

/// One bot to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpawnPayload {
    pub abilities: Vec<Ability>,
    pub location:  Point,
}

/// Spawns and actions for one tick, keyed by bot id.
///
/// Ids serialize as decimal-string JSON object keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickResponse {
    pub spawn:   BTreeMap<BotId, SpawnPayload>,
    pub actions: BTreeMap<BotId, Action>,
}

impl TickResponse {
    pub fn is_empty(&self) -> bool {
        self.spawn.is_empty() && self.actions.is_empty()
    }

    /// Single-line JSON form.
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
