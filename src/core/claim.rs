//! Claim history records.
//!
//! Every committed claim is recorded in order; the history index is the
//! turn number, and replaying the rectangles against a fresh grid
//! reconstructs the round. Records also carry the think time the
//! presentation layer measured for the move (the engine has no clock).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::player::PlayerId;
use super::rect::Rect;

/// An immutable record of one committed claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The player who claimed.
    pub player: PlayerId,

    /// The claimed rectangle.
    pub rect: Rect,

    /// How long the player deliberated, as reported by the caller.
    pub think_time: Duration,
}

impl Claim {
    /// Create a claim record with zero think time.
    #[must_use]
    pub fn new(player: PlayerId, rect: Rect) -> Self {
        Self::timed(player, rect, Duration::ZERO)
    }

    /// Create a claim record with a measured think time.
    #[must_use]
    pub fn timed(player: PlayerId, rect: Rect, think_time: Duration) -> Self {
        Self {
            player,
            rect,
            think_time,
        }
    }

    /// Cells claimed by this move.
    #[must_use]
    pub fn area(&self) -> u32 {
        self.rect.area()
    }
}
