//! Deterministic per-bot RNG.
//!
//! # Determinism strategy
//!
//! Each bot gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (bot_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive bot IDs uniformly across the seed space.  A bot
//! re-bound after a process restart with the same seed replays the same
//! choices.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand::seq::SliceRandom;

use crate::BotId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-bot deterministic RNG, owned by the bot's policy.
#[derive(Debug, Clone)]
pub struct BotRng(SmallRng);

impl BotRng {
    /// Seed deterministically from the run's global seed and a bot ID.
    pub fn new(global_seed: u64, bot: BotId) -> Self {
        let seed = global_seed ^ (bot.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BotRng(SmallRng::seed_from_u64(seed))
    }

    /// Pick one of `options` (open directions, candidate cells, ...).
    /// `None` when there is nothing to pick from.
    #[inline]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.0)
    }
}
