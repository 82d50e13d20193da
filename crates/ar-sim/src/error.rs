use ar_core::CoreError;
use ar_radar::RadarError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArenaError {
    #[error("arena configuration error: {0}")]
    Config(String),

    #[error("an arena needs at least one opponent")]
    NoOpponents,

    #[error("opponent {0:?} added twice")]
    DuplicateOpponent(String),

    #[error("elimination scheduled for unknown opponent {0:?}")]
    UnknownOpponent(String),

    #[error("radar error: {0}")]
    Radar(#[from] RadarError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ArenaResult<T> = Result<T, ArenaError>;
