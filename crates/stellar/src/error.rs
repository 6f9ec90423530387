use thiserror::Error;

/// Errors raised while interpreting stellar classifications and tables.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StellarError {
    #[error("invalid star class {0:?}")]
    InvalidClass(String),

    #[error("no table entry for star class {0}")]
    UnknownClass(String),

    #[error("name table {0} is empty")]
    EmptyNameTable(&'static str),
}

pub type Result<T> = std::result::Result<T, StellarError>;
