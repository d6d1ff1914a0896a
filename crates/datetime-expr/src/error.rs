//! Error types for expression generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A moment was supplied without an explicit UTC offset.
    #[error("Naive timestamp: {0}")]
    NaiveTimestamp(String),

    #[error("Unsupported situation: {0}")]
    UnsupportedSituation(String),

    /// The value is not a datetime at all.
    #[error("Invalid moment: {0}")]
    InvalidMoment(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, ExprError>;
