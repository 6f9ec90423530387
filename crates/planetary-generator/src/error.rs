use stellar::StellarError;
use thiserror::Error;

/// Failures at the generator entry points.
///
/// Running out of retries is not an error; generators return `None` then.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Stellar(#[from] StellarError),

    #[error("failed to parse generator configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
