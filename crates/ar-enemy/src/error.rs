use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EnemyError {
    #[error("observation of {name} has non-finite {field}")]
    NonFinite {
        name:  String,
        field: &'static str,
    },

    #[error("observation has an empty opponent name")]
    EmptyName,
}

pub type EnemyResult<T> = Result<T, EnemyError>;
