use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QualityError {
    #[error("unknown quality tier `{0}` (expected low, medium or high)")]
    UnknownTier(String),

    #[error("invalid controller config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, QualityError>;
