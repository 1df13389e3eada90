use sm_core::BotId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("bot keyed as {key} reports id {reported}")]
    IdMismatch { key: BotId, reported: BotId },

    #[error("invalid map size {width}x{height}")]
    InvalidBounds { width: i32, height: i32 },
}

pub type WorldResult<T> = Result<T, WorldError>;
