use sm_core::BotId;
use thiserror::Error;

/// Fatal engine errors.  Any of these aborts the tick; per-bot policy
/// failures never surface here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("spawn policy error: {0}")]
    SpawnPolicy(String),

    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),

    #[error("{0} is alive but has no bound policy")]
    UnboundBot(BotId),

    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("spawn script error: {0}")]
    Script(#[from] toml::de::Error),

    #[error("response encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
