//! Core value types: players, rectangles, the grid, RNG, configuration.
//!
//! Everything here is a plain value with no game-flow logic. The rules that
//! tie these together (turn order, scoring, termination) live in `engine`.

pub mod claim;
pub mod config;
pub mod grid;
pub mod player;
pub mod rect;
pub mod rng;

pub use claim::Claim;
pub use config::RoundConfig;
pub use grid::{Cell, Grid};
pub use player::{PlayerId, PlayerMap, PlayerScore};
pub use rect::Rect;
pub use rng::{GameRng, GameRngState};
