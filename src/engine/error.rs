//! Engine error taxonomy.
//!
//! Every failure is local, synchronous, and recoverable: an operation
//! either returns a new state or one of these. Selection validation is the
//! deliberate exception; a drag may legitimately stray off the grid, so
//! `validate_selection` answers `false` instead of erroring.

use thiserror::Error;

use crate::core::Rect;

/// Why an engine operation was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Commit attempted on a rectangle that overlaps an occupied or
    /// blocked cell, lies off the grid, or is malformed.
    #[error("illegal claim {0}: overlaps an occupied or blocked cell")]
    IllegalMove(Rect),

    /// Commit attempted after the round already ended.
    #[error("round is already over")]
    RoundOver,

    /// Next round requested while the current round is still active.
    #[error("round is still in progress")]
    NotOver,

    /// Round configuration describes an unplayable game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::IllegalMove(Rect { left: 1, right: 3, top: 2, bottom: 4 });
        assert_eq!(
            err.to_string(),
            "illegal claim [1..3]x[2..4]: overlaps an occupied or blocked cell"
        );

        assert_eq!(EngineError::RoundOver.to_string(), "round is already over");
        assert_eq!(EngineError::NotOver.to_string(), "round is still in progress");
    }
}
