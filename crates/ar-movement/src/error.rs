use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovementError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type MovementResult<T> = Result<T, MovementError>;
