//! Bracket input error types.

use thiserror::Error;

/// Errors reported by boundary validation.
///
/// Bracket generation itself never fails; these are only produced by the
/// opt-in checks in [`super::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// Participant id is empty or whitespace
    #[error("Participant at position {position} has an empty id")]
    EmptyId { position: usize },

    /// Same id submitted more than once
    #[error("Duplicate participant id: {0}")]
    DuplicateId(String),

    /// Seeds are 1-based ranks
    #[error("Participant {0} has seed 0, seeds start at 1")]
    ZeroSeed(String),

    /// Field exceeds the configured maximum
    #[error("Too many participants: max {max}, got {actual}")]
    TooManyParticipants { max: usize, actual: usize },
}

pub type BracketResult<T> = Result<T, BracketError>;
