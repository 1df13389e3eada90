//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  On the wire they are plain integers
//! (`#[serde(transparent)]`); JSON object keys carrying them are decimal
//! strings and are converted by the owning map type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// The wire form used for JSON object keys: the decimal integer.
            pub fn key(self) -> String {
                self.0.to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;
            fn from_str(s: &str) -> Result<$name, Self::Err> {
                s.trim().parse::<$inner>().map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a bot, unique within one tick's snapshot.
    pub struct BotId(u32);
}

typed_id! {
    /// Identity of a bank structure.
    pub struct BankId(u32);
}

typed_id! {
    /// Identity of an energy pad.
    pub struct PadId(u32);
}

// ── IdAllocator ───────────────────────────────────────────────────────────────

/// Monotonic bot-id generator for the spawn phase.
///
/// Ids are never reused within a process.  [`observe`](Self::observe) lets
/// the engine push the floor up whenever the snapshot reports a seed or a bot
/// id the allocator has not yet passed.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Start allocating at `start`.
    pub fn new(start: u32) -> Self {
        Self { next: start }
    }

    /// Ensure every future id is strictly greater than `seen` and at least
    /// `floor`.
    pub fn observe(&mut self, floor: u32, seen: Option<BotId>) {
        self.next = self.next.max(floor);
        if let Some(id) = seen {
            self.next = self.next.max(id.0.saturating_add(1));
        }
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> BotId {
        let id = BotId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> BotId {
        BotId(self.next)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(1)
    }
}
