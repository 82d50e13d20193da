use ar_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RadarError {
    #[error("radar configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("unknown radar kind {0:?} (expected \"lock_on\" or \"adaptive_sweep\")")]
    UnknownKind(String),
}

pub type RadarResult<T> = Result<T, RadarError>;
