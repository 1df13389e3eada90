use sm_core::Ability;
use thiserror::Error;

/// Per-bot recoverable failures.  The engine logs these and treats the bot as
/// having chosen no action for the tick.
#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("bot lacks required ability {0}")]
    MissingAbility(Ability),

    /// Failure raised by the policy itself.
    #[error("policy failure: {0}")]
    Policy(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
