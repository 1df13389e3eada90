//! Actions a bot can request for one tick.
//!
//! # Wire form
//!
//! | Action             | `action`        | extra fields                         |
//! |--------------------|-----------------|--------------------------------------|
//! | `Move(d)`          | `MOVE`          | `direction`                          |
//! | `MoveSpeed(d, n)`  | `MOVE`          | `direction`, `step`                  |
//! | `Harvest(d?)`      | `HARVEST`       | `direction` (nullable)               |
//! | `Deposit(d?)`      | `DEPOSIT`       | `direction` (nullable)               |
//! | `Poison(d?)`       | `POISON`        | `direction` (nullable)               |
//! | `SelfDestruct`     | `SELF_DESTRUCT` | `direction: null`                    |
//! | `Lockpick(p)`      | `LOCKPICK`      | `location`                           |

use serde::{Serialize, Serializer};

use sm_core::{Ability, Direction, Point};

/// One bot's decision for the current tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    Move(Direction),
    /// Speed move of 1 or 2 cells.  Requires `SPEED`.
    MoveSpeed { direction: Direction, step: u8 },
    /// `None` interacts with the bot's own cell.
    Harvest(Option<Direction>),
    Deposit(Option<Direction>),
    Poison(Option<Direction>),
    SelfDestruct,
    Lockpick(Point),
}

impl Action {
    /// The ability this action exercises, which is also its wire name.
    pub fn ability(&self) -> Ability {
        match self {
            Action::Move(_) | Action::MoveSpeed { .. } => Ability::Move,
            Action::Harvest(_) => Ability::Harvest,
            Action::Deposit(_) => Ability::Deposit,
            Action::Poison(_) => Ability::Poison,
            Action::SelfDestruct => Ability::SelfDestruct,
            Action::Lockpick(_) => Ability::Lockpick,
        }
    }

    /// Flatten into the engine's JSON shape.
    pub fn payload(&self) -> ActionPayload {
        let base = ActionPayload {
            action:    self.ability(),
            direction: None,
            step:      None,
            location:  None,
        };
        match *self {
            Action::Move(d) => ActionPayload { direction: Some(Some(d)), ..base },
            Action::MoveSpeed { direction, step } => ActionPayload {
                direction: Some(Some(direction)),
                step: Some(step),
                ..base
            },
            Action::Harvest(d) | Action::Deposit(d) | Action::Poison(d) => {
                ActionPayload { direction: Some(d), ..base }
            }
            Action::SelfDestruct => ActionPayload { direction: Some(None), ..base },
            Action::Lockpick(p) => ActionPayload { location: Some(p), ..base },
        }
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}

/// Serialized action.  An outer `None` omits the field, `Some(None)` writes
/// an explicit `null`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ActionPayload {
    pub action: Ability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Option<Direction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
}
