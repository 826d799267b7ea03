//! The round engine: rules, turn progression, scoring, termination.
//!
//! The presentation layer drives the engine through four operations:
//!
//! 1. [`RoundState::new`] starts a round (empty grid, random obstacles).
//! 2. [`RoundState::validate_selection`] answers "is this rectangle a
//!    legal claim?" during drag tracking. Side-effect free.
//! 3. [`RoundState::commit`] applies a claim, scores it, advances the
//!    turn, and detects the end of the round.
//! 4. [`RoundState::start_next_round`] resets the board for the next
//!    round with a rotated first player and carried cumulative scores.
//!
//! Per round the state machine is `Active --commit--> Active | Over` and
//! `Over --start_next_round--> Active`. There are no other transitions and
//! no mid-round undo.

pub mod error;
pub mod round;

pub use error::EngineError;
pub use round::RoundState;
